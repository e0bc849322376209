//! 사용자 DTO 모듈
//!
//! - [`request`] - 생성(`CreateUserRequest`), 수정(`UpdateUserRequest`) 요청 형태
//! - [`response`] - 전체 레코드 응답(`UserResponse`)과 메시지 응답

pub mod request;
pub mod response;
