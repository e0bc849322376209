//! 메모리 기반 사용자 리포지토리
//!
//! 외부 MongoDB 없이 서비스를 실행하거나 테스트할 때 사용합니다.
//! 삽입 순서를 저장소 고유 순서로 유지합니다.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::{NewUser, User, UserChanges, UserId},
};
use super::user_repo::UserRepository;

pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    available: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// 저장소 장애를 흉내냅니다. `false`이면 모든 작업이 `DatabaseError`로 실패합니다.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::DatabaseError("in-memory store is unavailable".to_string()))
        }
    }

    fn poisoned() -> AppError {
        AppError::InternalError("user store lock poisoned".to_string())
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> AppResult<UserId> {
        self.ensure_available()?;

        let id = UserId::generate();
        self.users
            .write()
            .map_err(|_| Self::poisoned())?
            .push(user.with_id(id));

        Ok(id)
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        self.ensure_available()?;

        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.iter().find(|user| user.id == *id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.ensure_available()?;

        Ok(self.users.read().map_err(|_| Self::poisoned())?.clone())
    }

    async fn update_fields(&self, id: &UserId, changes: &UserChanges) -> AppResult<()> {
        self.ensure_available()?;

        let mut users = self.users.write().map_err(|_| Self::poisoned())?;
        if let Some(user) = users.iter_mut().find(|user| user.id == *id) {
            changes.apply_to(user);
        }

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        self.ensure_available()?;

        let mut users = self.users.write().map_err(|_| Self::poisoned())?;
        let before = users.len();
        users.retain(|user| user.id != *id);

        Ok(users.len() < before)
    }

    async fn ping(&self) -> AppResult<()> {
        self.ensure_available()
    }
}
