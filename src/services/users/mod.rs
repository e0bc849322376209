//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성, 조회, 수정, 삭제 규칙을 담당하는 [`UserService`](user_service::UserService)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let users = service.get_all_users().await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
