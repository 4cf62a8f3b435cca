//! 인증 관련 서비스 모듈
//!
//! 토큰 발급은 TeamSphere 인증 서비스가 담당하고, 이 서비스는 같은 HS256 비밀키로
//! `Authorization` 헤더의 액세스 토큰을 검증합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::from_env()?;
//! let token = token_service.extract_bearer_token("Bearer eyJ...")?;
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::TokenService;
