//! 사용자 관리 서비스 모듈
//!
//! 사용자 정보 수정, 토큰 기반 프로필 조회, 이름 검색 비즈니스 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{UserService, UserServiceImpl};
//!
//! let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(user_repo, token_service));
//! let user = user_service.find_user_profile("Bearer eyJ...").await?;
//! ```

pub mod user_service;

pub use user_service::{UserService, UserServiceImpl};
