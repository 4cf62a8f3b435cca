use serde::Deserialize;

/// `GET /api/user/search?name=` 쿼리 파라미터
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUserQuery {
    pub name: String,
}
