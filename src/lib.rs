//! 사용자 CRUD 서비스 백엔드
//!
//! MongoDB에 저장된 단일 "user" 리소스에 대한 생성/조회/수정/삭제 API를
//! Actix-web으로 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 상태 코드 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, CRUD 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 저장소 경계 (MongoDB / Memory)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_service_backend::repositories::users::InMemoryUserRepository;
//! use user_service_backend::routes::configure_all_routes;
//! use user_service_backend::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//! let app = App::new().app_data(service).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
