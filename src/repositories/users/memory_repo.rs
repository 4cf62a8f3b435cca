use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};
use async_trait::async_trait;
use uuid::Uuid;
use crate::{
    core::errors::{AppResult, ErrorContext},
    domain::entities::users::{User, UserChanges},
    repositories::users::user_repo::UserRepository,
};

/// 프로세스 메모리에 사용자를 보관하는 저장소
///
/// MongoDB 구현과 같은 검색 규칙(대소문자 무시 부분 일치, `username` 정렬)을 따릅니다.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self { users: RwLock::new(users) }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<Uuid, User>>> {
        self.users.read().context("사용자 저장소 잠금 실패")
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.values().find(|u| u.username == username).cloned())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<User>> {
        let needle = query.to_lowercase();

        let mut found: Vec<User> = self.read()?
            .values()
            .filter(|u| {
                u.username.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        found.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(found)
    }

    async fn update(&self, id: Uuid, changes: &UserChanges) -> AppResult<Option<User>> {
        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;

        Ok(users.get_mut(&id).map(|user| {
            changes.apply_to(user);
            user.clone()
        }))
    }
}
