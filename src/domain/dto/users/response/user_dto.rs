use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::users::User;

/// 클라이언트에 반환되는 사용자 정보
///
/// 엔티티의 읽기 전용 사본이며 응답마다 새로 생성됩니다.
///
/// ```json
/// {
///   "id": "6f1c2d2e-6a43-4c51-9d7e-9b1f6c8f2a10",
///   "username": "alice",
///   "email": "alice@teamsphere.co",
///   "profilePicture": null,
///   "bio": "Backend engineer",
///   "lastUpdatedDate": "2024-01-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub last_updated_date: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            profile_picture,
            bio,
            last_updated_date,
            ..
        } = user;

        Self {
            id,
            username,
            email,
            profile_picture,
            bio,
            last_updated_date,
        }
    }
}
