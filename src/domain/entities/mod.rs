//! # Domain Entities Module
//!
//! MongoDB 문서와 1:1로 매핑되는 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈
//! ├── models/
//! └── dto/
//! ```

pub mod users;
