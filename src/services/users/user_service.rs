//! # 사용자 관리 서비스 구현
//!
//! 핸들러가 의존하는 [`UserService`] trait과 MongoDB 리포지토리 기반 구현체입니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  update_user · find_user_profile · search_user│
//! └──────────────────────────────────────────────┘
//!          │                         │
//!          ▼                         ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │  UserRepository  │     │   TokenService   │
//! │ (MongoDB + Redis)│     │   (HS256 JWT)    │
//! └──────────────────┘     └──────────────────┘
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{dto::users::UpdateUserRequest, entities::users::{User, UserChanges}},
    repositories::users::UserRepository,
    services::auth::TokenService,
};

/// 사용자 엔드포인트가 사용하는 서비스 인터페이스
///
/// 핸들러는 이 trait 객체(`Arc<dyn UserService>`)만 알고 있으므로
/// 테스트에서는 임의의 구현으로 교체할 수 있습니다.
#[async_trait]
pub trait UserService: Send + Sync {
    /// 사용자 정보를 수정하고 수정된 엔티티를 반환합니다.
    async fn update_user(&self, user_id: Uuid, request: UpdateUserRequest) -> AppResult<User>;

    /// `Authorization` 헤더 값(`Bearer <jwt>`)으로 현재 사용자를 조회합니다.
    async fn find_user_profile(&self, jwt: &str) -> AppResult<User>;

    /// 사용자명 또는 이메일로 사용자를 검색합니다.
    async fn search_user(&self, query: &str) -> AppResult<Vec<User>>;
}

/// 리포지토리와 토큰 서비스에 위임하는 기본 구현
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,

    token_service: Arc<TokenService>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    fn not_found() -> AppError {
        AppError::NotFound("사용자를 찾을 수 없습니다".to_string())
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    /// # 처리 과정
    ///
    /// 1. 요청 검증 (`validator`), 빈 요청 거부
    /// 2. 사용자명 변경 시 다른 사용자의 사용 여부 확인 (`ConflictError`)
    /// 3. 전달된 필드와 수정 시각만 원자적으로 반영, 대상이 없으면 `NotFound`
    async fn update_user(&self, user_id: Uuid, request: UpdateUserRequest) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        request.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if request.is_empty() {
            return Err(AppError::ValidationError("변경할 항목이 없습니다".to_string()));
        }

        let UpdateUserRequest {
            username,
            profile_picture,
            bio,
        } = request;

        if let Some(username) = &username {
            if let Some(existing) = self.user_repo.find_by_username(username).await? {
                if existing.id != user_id {
                    return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
                }
            }
        }

        let changes = UserChanges::new(username, profile_picture, bio);

        let user = self.user_repo
            .update(user_id, &changes)
            .await?
            .ok_or_else(Self::not_found)?;

        log::debug!("User update took: {:?}", start_time.elapsed());

        Ok(user)
    }

    async fn find_user_profile(&self, jwt: &str) -> AppResult<User> {
        let token = self.token_service.extract_bearer_token(jwt)?;
        let claims = self.token_service.verify_token(token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("토큰의 사용자 ID 형식이 올바르지 않습니다".to_string()))?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(Self::not_found)
    }

    async fn search_user(&self, query: &str) -> AppResult<Vec<User>> {
        let query = query.trim();

        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.user_repo.search(query).await
    }
}
