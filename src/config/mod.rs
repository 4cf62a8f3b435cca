//! # Configuration Module
//!
//! 사용자 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `main`에서 `PROFILE`에 맞는
//! `.env.*` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, Rate Limit, CORS 설정
//! - [`auth_config`] - JWT 검증 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let secret = JwtConfig::resolve_secret(&env, std::env::var("JWT_SECRET").ok())?;
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
