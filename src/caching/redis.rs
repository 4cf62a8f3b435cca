//! # Redis 캐시 클라이언트 구현
//!
//! 값은 모두 JSON 문자열로 저장합니다. 연결은 `ConnectionManager`가 관리하며,
//! 끊어진 연결은 다음 명령에서 자동으로 재연결됩니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ErrorKind, RedisError};
use serde::{Serialize, de::DeserializeOwned};
use crate::config::StorageConfig;

/// Redis 캐시 클라이언트 래퍼
#[derive(Clone)]
pub struct RedisClient {
    conn: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, RedisError> {
        Self::connect(&StorageConfig::redis_url()).await
    }

    pub async fn connect(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let mut conn = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { conn })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| RedisError::from((ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), RedisError> {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| RedisError::from((ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.conn.clone();
        conn.del(key).await
    }
}
