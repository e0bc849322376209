//! 사용자 수정 요청 DTO
//!
//! 모든 필드가 선택 사항이며, 포함된 필드만 변경됩니다.
//!
//! ## null 과 필드 생략
//!
//! `{"age": null}`과 `{}`는 구분되지 않고 둘 다 "변경하지 않음"으로 처리됩니다.
//! 필드를 비우는 동작이 필요해지면 `Option<Option<T>>` 형태의 삼상태 표현으로
//! 바꿔야 합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i64>,
}

impl UpdateUserRequest {
    /// 변경할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}
