//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`UserRepository`](user_repo::UserRepository) - 저장소 경계 trait
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB 구현
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 메모리 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database));
//! let users = repo.find_all().await?;
//! ```

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::{MongoUserRepository, UserRepository};
