//! # Authentication Configuration Module
//!
//! 프로필 조회 시 사용되는 JWT 검증 설정을 관리합니다.
//! 토큰 발급은 별도의 인증 서비스가 담당하며, 이 서비스는 같은 비밀키로
//! `Authorization` 헤더의 토큰을 검증하기만 합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="shared-hs256-secret"
//! export JWT_EXPIRATION_HOURS=24
//! ```
//!
//! `PROFILE=prod`에서 `JWT_SECRET`이 없거나 개발용 기본값이면 서버가 시작되지 않습니다.

use std::env;
use super::Environment;
use crate::core::errors::{AppError, AppResult};

/// 개발 프로필에서만 허용되는 기본 비밀키
pub const DEV_JWT_SECRET: &str = "your-secret-key";

pub struct JwtConfig;

impl JwtConfig {
    /// 설정된 비밀키를 실행 환경 기준으로 검증합니다.
    ///
    /// 프로덕션에서는 비어 있거나 기본값인 비밀키를 거부합니다.
    pub fn resolve_secret(environment: &Environment, configured: Option<String>) -> AppResult<String> {
        let configured = configured.filter(|secret| !secret.trim().is_empty());

        if environment.is_production() {
            return match configured {
                Some(secret) if secret != DEV_JWT_SECRET => Ok(secret),
                _ => Err(AppError::InternalError(
                    "JWT_SECRET must be set to a non-default value in production".to_string(),
                )),
            };
        }

        Ok(configured.unwrap_or_else(|| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEV_JWT_SECRET.to_string()
        }))
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}
