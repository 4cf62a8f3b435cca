//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserRepository`] trait에만 의존합니다.
//! 운영 환경에서는 MongoDB + Redis 구현을, 테스트에서는 메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db, redis));
//! let users = user_repo.search("ali").await?;
//! ```

pub mod users;
