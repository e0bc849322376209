//! User Entity Implementation
//!
//! 저장소에 보관되는 사용자 레코드와, 생성/수정 시 저장소에 전달되는 값 타입입니다.

use chrono::{DateTime, Utc};
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use super::user_id::UserId;

/// 사용자 엔티티
///
/// 식별자와 생성 시각은 생성 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 저장소가 부여한 식별자
    pub id: UserId,
    pub name: String,
    /// 형식 검증 없이 입력된 그대로 저장
    pub email: String,
    /// 0 이상 150 이하
    pub age: i64,
    /// 생성 시각 (UTC, 밀리초 정밀도)
    pub created_at: DateTime<Utc>,
}

/// 아직 식별자가 부여되지 않은 새 사용자
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// 생성 요청으로부터 새 사용자를 만들고 생성 시각을 현재 시각으로 설정합니다.
    ///
    /// BSON 날짜는 밀리초 단위로 저장되므로 생성 시각도 밀리초로 절삭합니다.
    /// 그래야 생성 응답과 이후 조회 결과의 `created_at`이 일치합니다.
    pub fn from_request(request: CreateUserRequest) -> Self {
        let now = Utc::now();
        let created_at = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);

        Self {
            name: request.name,
            email: request.email,
            age: request.age,
            created_at,
        }
    }

    /// 저장소가 부여한 식별자를 붙여 완전한 엔티티로 만듭니다.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            created_at: self.created_at,
        }
    }
}

/// 부분 수정 내용
///
/// `None`인 필드는 변경하지 않습니다. 필드를 비우는(clear) 수정은 표현할 수 없습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl UserChanges {
    /// 변경할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }

    /// 엔티티에 변경 내용을 적용합니다. 식별자와 생성 시각은 유지됩니다.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            age: request.age,
        }
    }
}
