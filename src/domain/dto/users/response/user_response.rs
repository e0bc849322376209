use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 전체 사용자 레코드 응답
///
/// 식별자와 생성 시각이 항상 포함됩니다.
///
/// ```json
/// {
///   "_id": "65f1c2a9e4b0a1b2c3d4e5f6",
///   "name": "Ada",
///   "email": "ada@x.com",
///   "age": 30,
///   "created_at": "2024-03-13T10:15:30.123Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            age,
            created_at,
        } = user;

        Self {
            id: id.to_hex(),
            name,
            email,
            age,
            created_at,
        }
    }
}

/// 단순 메시지 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
