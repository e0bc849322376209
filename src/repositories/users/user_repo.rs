//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 저장소 접근 계층입니다.
//! [`UserRepository`] trait이 저장소 경계를 정의하고, [`MongoUserRepository`]가
//! MongoDB `users` 컬렉션 위에서 이를 구현합니다.
//!
//! ## 컬렉션 구조
//!
//! ```text
//! users
//! {
//!   _id:        ObjectId   // 저장소가 부여
//!   name:       string
//!   email:      string
//!   age:        int
//!   created_at: Date       // 생성 시 한 번만 기록
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 모든 드라이버 오류는 `AppError::DatabaseError`로 변환됩니다.
//! 재시도는 하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime as BsonDateTime, Document},
    Collection,
};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::{NewUser, User, UserChanges, UserId},
};

/// 사용자 저장소 경계
///
/// 서비스 계층은 이 trait에만 의존하며, 구현체는 시작 시점에 주입됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 저장소가 부여한 식별자를 반환합니다.
    async fn insert(&self, user: NewUser) -> AppResult<UserId>;

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// 저장소 고유 순서로 모든 사용자를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 변경 내용을 `$set`으로 반영합니다. 대상이 없어도 에러가 아닙니다.
    async fn update_fields(&self, id: &UserId, changes: &UserChanges) -> AppResult<()>;

    /// 실제로 삭제된 문서가 있으면 `true`를 반환합니다.
    async fn delete(&self, id: &UserId) -> AppResult<bool>;

    /// 저장소 연결 상태를 확인합니다.
    async fn ping(&self) -> AppResult<()>;
}

/// MongoDB에 저장되는 사용자 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    age: i64,
    created_at: BsonDateTime,
}

impl From<NewUser> for UserDocument {
    fn from(user: NewUser) -> Self {
        Self {
            id: None,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: BsonDateTime::from_millis(user.created_at.timestamp_millis()),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = AppError;

    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| AppError::DatabaseError("stored user document has no _id".to_string()))?;

        let millis = document.created_at.timestamp_millis();
        let created_at: DateTime<Utc> = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            AppError::DatabaseError(format!("created_at out of range for user {}", id.to_hex()))
        })?;

        Ok(User {
            id: UserId::from(id),
            name: document.name,
            email: document.email,
            age: document.age,
            created_at,
        })
    }
}

/// 변경 내용을 `$set` 대상 문서로 변환합니다.
fn set_document(changes: &UserChanges) -> Document {
    let mut set = Document::new();

    if let Some(name) = &changes.name {
        set.insert("name", Bson::String(name.clone()));
    }
    if let Some(email) = &changes.email {
        set.insert("email", Bson::String(email.clone()));
    }
    if let Some(age) = changes.age {
        set.insert("age", Bson::Int64(age));
    }

    set
}

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> AppResult<Collection<UserDocument>> {
        Ok(self
            .db
            .get_database()?
            .collection::<UserDocument>(Self::COLLECTION_NAME))
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: NewUser) -> AppResult<UserId> {
        let result = self
            .collection()?
            .insert_one(UserDocument::from(user))
            .await?;

        result
            .inserted_id
            .as_object_id()
            .map(UserId::from)
            .ok_or_else(|| {
                AppError::DatabaseError(format!(
                    "unexpected inserted id type: {}",
                    result.inserted_id
                ))
            })
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let document = self
            .collection()?
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;

        document.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection()?.find(doc! {}).await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;

        documents.into_iter().map(User::try_from).collect()
    }

    async fn update_fields(&self, id: &UserId, changes: &UserChanges) -> AppResult<()> {
        let set = set_document(changes);
        if set.is_empty() {
            return Ok(());
        }

        let result = self
            .collection()?
            .update_one(doc! { "_id": id.as_object_id() }, doc! { "$set": set })
            .await?;

        log::debug!(
            "user {} update: matched={}, modified={}",
            id,
            result.matched_count,
            result.modified_count
        );

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        let result = self
            .collection()?
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_contains_only_present_fields() {
        let changes = UserChanges {
            age: Some(31),
            ..Default::default()
        };

        let set = set_document(&changes);

        assert_eq!(set, doc! { "age": 31_i64 });
    }

    #[test]
    fn test_set_document_empty_for_empty_changes() {
        assert!(set_document(&UserChanges::default()).is_empty());
    }

    #[test]
    fn test_document_round_trip_keeps_id_and_created_at() {
        let oid = ObjectId::new();
        let document = UserDocument {
            id: Some(oid),
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            age: 30,
            created_at: BsonDateTime::from_millis(1_710_324_930_123),
        };

        let user = User::try_from(document).unwrap();

        assert_eq!(user.id.as_object_id(), oid);
        assert_eq!(user.created_at.timestamp_millis(), 1_710_324_930_123);
    }

    #[test]
    fn test_document_without_id_is_storage_error() {
        let document = UserDocument {
            id: None,
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            age: 30,
            created_at: BsonDateTime::now(),
        };

        assert!(matches!(User::try_from(document), Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_int32_age_from_existing_documents() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "name": "Ada",
            "email": "ada@x.com",
            "age": 30_i32,
            "created_at": BsonDateTime::now(),
        };

        let document: UserDocument = mongodb::bson::from_document(raw).unwrap();

        assert_eq!(document.age, 30);
    }
}
