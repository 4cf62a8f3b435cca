//! 사용자 엔티티

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `users` 컬렉션의 사용자 문서
///
/// 식별자는 UUID이며 MongoDB `_id` 필드에 저장됩니다.
/// 엔티티 동등성은 식별자 기준이 아닌 전체 필드 비교입니다.
/// 검색 결과 중복 제거는 호출 측에서 `id`를 키로 수행합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", with = "uuid_as_string")]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            username,
            email,
            profile_picture: None,
            bio: None,
            created_date: now,
            last_updated_date: now,
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

}

/// 사용자 부분 수정 내용
///
/// `None` 필드는 저장된 값을 유지합니다. `last_updated_date`는 항상 기록됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub last_updated_date: DateTime<Utc>,
}

impl UserChanges {
    pub fn new(username: Option<String>, profile_picture: Option<String>, bio: Option<String>) -> Self {
        Self {
            username,
            profile_picture,
            bio,
            last_updated_date: Utc::now(),
        }
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if self.profile_picture.is_some() {
            user.profile_picture = self.profile_picture.clone();
        }
        if self.bio.is_some() {
            user.bio = self.bio.clone();
        }
        user.last_updated_date = self.last_updated_date;
    }
}

/// UUID를 항상 하이픈 문자열로 저장합니다. 쿼리 필터도 `id.to_string()`을 사용합니다.
mod uuid_as_string {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Uuid::parse_str(&raw).map_err(de::Error::custom)
    }
}
