//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 요청 파싱, 상태 코드 매핑     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 검증, CRUD 규칙                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserRepository - MongoDB / Memory            ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 주입받고, 실패는
//! `AppError`로 반환하여 `ResponseError` 구현이 응답을 만들도록 합니다.

pub mod users;

use actix_web::web;
use crate::core::errors::AppError;

/// JSON 본문 추출기 설정
///
/// 본문 파싱 실패(누락된 필드, 잘못된 타입, 깨진 JSON)를 `ValidationError`로
/// 변환하여 다른 에러와 같은 `{"detail": ...}` 형식으로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
