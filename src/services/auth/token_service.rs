//! JWT 액세스 토큰 검증/발급 서비스

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::{Environment, JwtConfig},
    core::errors::AppError,
    domain::{entities::users::User, models::token::TokenClaims},
};

const BEARER_PREFIX: &str = "Bearer ";

/// HS256 JWT 서비스
///
/// 키는 생성 시 한 번만 만들어 두고 모든 요청에서 공유합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 설정으로 생성합니다.
    ///
    /// 프로덕션 프로필에서 비밀키가 설정되지 않았으면 에러를 반환합니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::for_environment(
            &Environment::current(),
            std::env::var("JWT_SECRET").ok(),
            JwtConfig::expiration_hours(),
        )
    }

    pub fn for_environment(
        environment: &Environment,
        configured_secret: Option<String>,
        expiration_hours: i64,
    ) -> Result<Self, AppError> {
        let secret = JwtConfig::resolve_secret(environment, configured_secret)?;
        Ok(Self::new(&secret, expiration_hours))
    }

    /// 사용자용 액세스 토큰을 발급합니다.
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user.id_string(),
            email: Some(user.email.clone()),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    pub fn encode_claims(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료 시각을 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// `Authorization` 헤더 값에서 `Bearer ` 접두사를 제거합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix(BEARER_PREFIX).map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 1)
    }

    #[test]
    fn test_generated_token_verifies() {
        let service = service();
        let user = User::new("alice".to_string(), "alice@teamsphere.co".to_string());

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string());
        assert_eq!(claims.email.as_deref(), Some("alice@teamsphere.co"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let now = Utc::now();
        let claims = TokenClaims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: None,
            iat: (now - Duration::hours(3)).timestamp(),
            exp: (now - Duration::hours(2)).timestamp(),
        };
        let token = service.encode_claims(&claims).unwrap();

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let user = User::new("bob".to_string(), "bob@teamsphere.co".to_string());
        let token = TokenService::new("other-secret", 1)
            .generate_access_token(&user)
            .unwrap();

        assert!(matches!(
            service().verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            service().verify_token("not.a.jwt"),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_production_without_secret_cannot_be_built() {
        let result = TokenService::for_environment(&Environment::Production, None, 1);

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_production_rejects_token_signed_with_default_secret() {
        let user = User::new("alice".to_string(), "alice@teamsphere.co".to_string());
        let forged = TokenService::new(crate::config::auth_config::DEV_JWT_SECRET, 1)
            .generate_access_token(&user)
            .unwrap();

        let service = TokenService::for_environment(
            &Environment::Production,
            Some("prod-only-secret".to_string()),
            1,
        )
        .unwrap();

        assert!(matches!(
            service.verify_token(&forged),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("abc.def").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
    }
}
