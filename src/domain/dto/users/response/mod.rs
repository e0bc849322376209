//! # 사용자 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 전달할 JSON 형태로 변환합니다.
//! 식별자는 `_id` 키에 16진수 문자열로, 생성 시각은 ISO-8601 문자열로 직렬화됩니다.

pub mod user_response;

pub use user_response::{MessageResponse, UserResponse};
