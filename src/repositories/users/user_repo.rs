use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use uuid::Uuid;
use crate::{
    caching::redis::RedisClient,
    config::StorageConfig,
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::{User, UserChanges},
};

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// `username` 또는 `email`에 `query`가 포함된 사용자를 대소문자 구분 없이 찾습니다.
    /// 결과는 `username` 오름차순입니다.
    async fn search(&self, query: &str) -> AppResult<Vec<User>>;

    /// 전달된 필드와 수정 시각만 원자적으로 반영하고 수정된 사용자를 반환합니다.
    /// 사용자가 없으면 `None`이며 새로 생성하지 않습니다.
    async fn update(&self, id: Uuid, changes: &UserChanges) -> AppResult<Option<User>>;
}

pub const USERS_COLLECTION: &str = "users";

/// MongoDB `users` 컬렉션 + Redis ID 캐시
pub struct MongoUserRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,

    cache_ttl_seconds: u64,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self {
            db,
            redis,
            cache_ttl_seconds: StorageConfig::user_cache_ttl_seconds(),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    fn cache_key(id: Uuid) -> String {
        format!("user:{}", id)
    }

    async fn invalidate_cache(&self, id: Uuid) {
        if let Err(e) = self.redis.del(&Self::cache_key(id)).await {
            log::warn!("사용자 캐시 무효화 실패 ({}): {}", id, e);
        }
    }

    /// 이메일/사용자명 유니크 인덱스를 생성합니다. 서버 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// `$set`에 들어갈 필드 문서를 만듭니다. `None` 필드는 제외됩니다.
pub fn set_document(changes: &UserChanges) -> AppResult<Document> {
    let mut fields = Document::new();

    if let Some(username) = &changes.username {
        fields.insert("username", username.as_str());
    }
    if let Some(profile_picture) = &changes.profile_picture {
        fields.insert("profile_picture", profile_picture.as_str());
    }
    if let Some(bio) = &changes.bio {
        fields.insert("bio", bio.as_str());
    }

    // 엔티티 직렬화와 같은 표현으로 저장
    let last_updated_date = to_bson(&changes.last_updated_date)
        .map_err(|e| AppError::InternalError(format!("수정 시각 변환 실패: {}", e)))?;
    fields.insert("last_updated_date", last_updated_date);

    Ok(fields)
}

fn is_duplicate_key(error: &MongoError) -> bool {
    const DUPLICATE_KEY: i32 = 11000;

    match error.kind.as_ref() {
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// 검색어를 정규식 메타문자 이스케이프 후 대소문자 무시 부분 일치 필터로 만듭니다.
pub fn search_filter(query: &str) -> Document {
    let pattern = regex::escape(query);

    doc! {
        "$or": [
            { "username": { "$regex": pattern.as_str(), "$options": "i" } },
            { "email": { "$regex": pattern.as_str(), "$options": "i" } },
        ]
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let cache_key = Self::cache_key(id);

        // 캐시 확인
        match self.redis.get::<User>(&cache_key).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => log::warn!("사용자 캐시 조회 실패 ({}): {}", id, e),
        }

        // DB 조회
        let user = self.collection()
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref user) = user {
            if let Err(e) = self.redis.set_with_expiry(&cache_key, user, self.cache_ttl_seconds).await {
                log::warn!("사용자 캐시 저장 실패 ({}): {}", id, e);
            }
        }

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn search(&self, query: &str) -> AppResult<Vec<User>> {
        let cursor = self.collection()
            .find(search_filter(query))
            .sort(doc! { "username": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update(&self, id: Uuid, changes: &UserChanges) -> AppResult<Option<User>> {
        let fields = set_document(changes)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated_user = self.collection()
            .find_one_and_update(
                doc! { "_id": id.to_string() },
                doc! { "$set": fields },
            )
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        // 캐시 무효화
        if updated_user.is_some() {
            self.invalidate_cache(id).await;
        }

        Ok(updated_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_filter_matches_username_or_email() {
        let filter = search_filter("alice");
        let branches = filter.get_array("$or").unwrap();

        assert_eq!(branches.len(), 2);
        let username = branches[0].as_document().unwrap().get_document("username").unwrap();
        assert_eq!(username.get_str("$regex").unwrap(), "alice");
        assert_eq!(username.get_str("$options").unwrap(), "i");
        assert!(branches[1].as_document().unwrap().contains_key("email"));
    }

    #[test]
    fn test_search_filter_escapes_regex_metacharacters() {
        let filter = search_filter("a.b*(c)");
        let branches = filter.get_array("$or").unwrap();
        let username = branches[0].as_document().unwrap().get_document("username").unwrap();

        assert_eq!(username.get_str("$regex").unwrap(), r"a\.b\*\(c\)");
    }

    #[test]
    fn test_set_document_contains_present_fields_only() {
        let changes = UserChanges::new(None, None, Some("Backend engineer".to_string()));

        let fields = set_document(&changes).unwrap();

        assert_eq!(fields.get_str("bio").unwrap(), "Backend engineer");
        assert!(!fields.contains_key("username"));
        assert!(!fields.contains_key("profile_picture"));
        assert!(!fields.contains_key("_id"));
        assert!(!fields.contains_key("created_date"));
        assert_eq!(
            fields.get("last_updated_date"),
            Some(&to_bson(&changes.last_updated_date).unwrap())
        );
    }

    #[test]
    fn test_set_document_uses_entity_field_names() {
        let user = User::new("alice".to_string(), "alice@teamsphere.co".to_string());
        let stored = mongodb::bson::to_document(&User {
            profile_picture: Some("https://cdn.teamsphere.co/a.png".to_string()),
            bio: Some("bio".to_string()),
            ..user
        })
        .unwrap();

        let changes = UserChanges::new(
            Some("alicia".to_string()),
            Some("https://cdn.teamsphere.co/b.png".to_string()),
            Some("new bio".to_string()),
        );
        let fields = set_document(&changes).unwrap();

        for key in fields.keys() {
            assert!(stored.contains_key(key), "unknown field {}", key);
        }
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_cache_key_uses_user_prefix() {
        let id = Uuid::nil();

        assert_eq!(
            MongoUserRepository::cache_key(id),
            "user:00000000-0000-0000-0000-000000000000"
        );
    }
}
