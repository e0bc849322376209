//! Users Entity Module

pub mod user;
pub mod user_id;

pub use user::{NewUser, User, UserChanges};
pub use user_id::UserId;
