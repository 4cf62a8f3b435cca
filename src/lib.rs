//! 팀스피어 사용자 서비스 백엔드
//!
//! 사용자 정보 수정, JWT 기반 프로필 조회, 이름 검색을 제공하는
//! Rust 기반 REST 서비스입니다.
//!
//! # Features
//!
//! - **사용자 수정**: `PUT /api/user/update/{userId}`
//! - **프로필 조회**: `GET /api/user/profile` (`Authorization: Bearer <jwt>`)
//! - **사용자 검색**: `GET /api/user/search?name=` (ID 기준 중복 제거)
//! - **MongoDB**: 사용자 데이터 영구 저장
//! - **Redis**: 사용자 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, DTO 변환, 에러 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (dyn UserService)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (dyn UserRepository)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use teamsphere_user_service::{
//!     domain::mappers::UserDtoMapper,
//!     repositories::users::InMemoryUserRepository,
//!     routes::configure_all_routes,
//!     services::{auth::TokenService, users::{UserService, UserServiceImpl}},
//! };
//!
//! let service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(TokenService::from_env()?),
//! ));
//!
//! let app = App::new()
//!     .app_data(web::Data::from(service))
//!     .app_data(web::Data::new(UserDtoMapper::new()))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
