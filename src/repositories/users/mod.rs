//! 사용자 데이터 액세스 계층
//!
//! - [`UserRepository`](user_repo::UserRepository) - 저장소 인터페이스
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB 저장 + Redis 캐시
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 프로세스 내 저장소

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::{MongoUserRepository, UserRepository};
pub use memory_repo::InMemoryUserRepository;
