use serde::{Deserialize, Serialize};

/// 액세스 토큰 클레임
///
/// `sub`에는 사용자 UUID 문자열이 들어갑니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
}
