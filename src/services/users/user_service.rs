//! # 사용자 관리 서비스 구현
//!
//! 사용자 리소스의 생성, 조회, 수정, 삭제 규칙을 구현합니다.
//!
//! ## 동작 규칙
//!
//! - 요청 본문 검증은 저장소에 접근하기 전에 수행됩니다.
//! - 형식이 잘못된 ID와 존재하지 않는 ID는 구분하지 않고 모두 "없음"으로 처리합니다.
//! - 수정 결과는 요청 내용을 그대로 돌려주지 않고 저장소에서 다시 읽어 반환합니다.
//! - 동시 수정은 저장소 수준에서 마지막 쓰기가 이깁니다.
//!
//! ```text
//! Handler ──▶ UserService ──▶ Arc<dyn UserRepository> ──▶ MongoDB / Memory
//! ```

use std::sync::Arc;
use log::{debug, info, warn};
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::{CreateUserRequest, UpdateUserRequest},
        entities::users::{NewUser, User, UserChanges, UserId},
    },
    repositories::users::UserRepository,
};

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자를 생성합니다.
    ///
    /// 생성 시각을 현재 UTC 시각으로 설정해 저장한 뒤, 부여된 ID로 다시 조회한
    /// 레코드를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 이름이 비었거나 나이가 0-150 범위를 벗어남
    /// * `DatabaseError` - 저장 실패, 또는 저장 직후 재조회에서 레코드를 찾지 못함
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        request.validate()?;

        let new_user = NewUser::from_request(request);
        let id = self.user_repo.insert(new_user).await?;

        let created = self.user_repo.find_by_id(&id).await?.ok_or_else(|| {
            warn!("생성 직후 사용자 {}를 찾을 수 없습니다", id);
            AppError::DatabaseError("User creation failed, user not found in database.".to_string())
        })?;

        info!("사용자 생성 완료: {}", created.id);
        Ok(created)
    }

    /// ID로 사용자를 조회합니다. 형식이 잘못된 ID는 `None`을 반환합니다.
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Some(user_id) = UserId::parse(id) else {
            debug!("잘못된 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        self.user_repo.find_by_id(&user_id).await
    }

    /// 모든 사용자를 저장소 순서대로 반환합니다.
    pub async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    /// 요청에 포함된 필드만 변경합니다.
    ///
    /// 변경할 필드가 없으면 저장소에 쓰지 않고 현재 레코드를 반환합니다.
    /// 대상이 없거나 ID 형식이 잘못된 경우 `None`을 반환합니다.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<Option<User>> {
        request.validate()?;

        let Some(user_id) = UserId::parse(id) else {
            debug!("잘못된 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        let changes = UserChanges::from(request);
        if changes.is_empty() {
            return self.user_repo.find_by_id(&user_id).await;
        }

        self.user_repo.update_fields(&user_id, &changes).await?;

        self.user_repo.find_by_id(&user_id).await
    }

    /// 사용자를 삭제합니다. 실제로 삭제된 경우에만 `true`를 반환합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<bool> {
        let Some(user_id) = UserId::parse(id) else {
            debug!("잘못된 사용자 ID 형식: {}", id);
            return Ok(false);
        };

        let deleted = self.user_repo.delete(&user_id).await?;
        if deleted {
            info!("사용자 삭제 완료: {}", user_id);
        }

        Ok(deleted)
    }

    /// 저장소 연결 상태를 확인합니다.
    pub async fn is_store_healthy(&self) -> bool {
        match self.user_repo.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("저장소 ping 실패: {}", e);
                false
            }
        }
    }
}
