//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 사용자 관리와 토큰 검증 기능을 담당합니다.
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//!
//! # Features
//!
//! - 사용자 정보 수정 (검증, 사용자명 중복 확인)
//! - JWT 액세스 토큰 기반 프로필 조회
//! - 사용자명/이메일 부분 일치 검색
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::{UserService, UserServiceImpl}};
//!
//! let token_service = Arc::new(TokenService::from_env()?);
//! let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(user_repo, token_service));
//! ```

pub mod users;
pub mod auth;
