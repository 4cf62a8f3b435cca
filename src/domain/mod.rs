//! # Domain Layer Module
//!
//! 사용자 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - User 엔티티 (MongoDB `users` 컬렉션 문서)
//! ├── dto       - UpdateUserRequest / SearchUserQuery / UserDto
//! ├── mappers   - User → UserDto 변환기
//! └── models    - JWT 클레임 등 외부 계약 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 엔티티는 서비스/리포지토리 계층만 변경하며, 핸들러는 항상
//! [`mappers::UserDtoMapper`]를 거쳐 DTO 형태로만 응답합니다.

pub mod entities;
pub mod dto;
pub mod mappers;
pub mod models;
