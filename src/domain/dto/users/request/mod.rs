//! # 사용자 요청 DTO 모듈
//!
//! 클라이언트 입력을 역직렬화하고 `validator`로 필드 제약을 검증합니다.
//! 검증은 저장소에 접근하기 전에 수행됩니다.
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let request: CreateUserRequest = serde_json::from_str(body)?;
//! request.validate()?;
//! ```

pub mod create_user_request;
pub mod update_user_request;

pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;
