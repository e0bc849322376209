//! 사용자 생성 요청 DTO
//!
//! 새 사용자 생성에 필요한 세 필드를 모두 요구합니다.
//! 식별자와 생성 시각은 서버가 부여하므로 요청 본문에 포함되어도 무시됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// 형식 검증을 하지 않습니다.
    pub email: String,

    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: i64,
}
