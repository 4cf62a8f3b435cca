//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//! 사용자 리포지토리의 ID 조회 결과를 캐시하는 데 사용됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("user:6f1c...", &user, 600).await?;
//! let cached: Option<User> = cache.get("user:6f1c...").await?;
//! cache.del("user:6f1c...").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
