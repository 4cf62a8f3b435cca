//! # Application Error Handling System
//!
//! 사용자 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `Result<HttpResponse, AppError>`를 반환하면 자동으로 HTTP 응답이 됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 경로/쿼리/본문 |
//! | `UserError` | 400 Bad Request | 사용자 수정 처리 실패 (원인 메시지 포함) |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락/만료/위조 |
//! | `NotFound` | 404 Not Found | 사용자 없음 |
//! | `ConflictError` | 409 Conflict | 사용자명 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "user_error",
//!   "message": "Error during update user process: Not found: 사용자를 찾을 수 없습니다",
//!   "timestamp": "2024-01-01T12:00:00Z"
//! }
//! ```
//!
//! `InternalError`는 생성 시 전달된 문맥 메시지만 노출합니다. 원인 에러는
//! 핸들러에서 로그로만 남기고 응답 본문에는 포함하지 않습니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 사용자 수정 처리 실패
    ///
    /// 어떤 원인이든 하나의 종류로 묶이며, 원인 에러의 메시지를 문자열로 포함합니다.
    #[error("{0}")]
    UserError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database_error",
            AppError::RedisError(_) => "cache_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::AuthenticationError(_) => "authentication_error",
            AppError::UserError(_) => "user_error",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 클라이언트에게 노출해도 되는 메시지
    fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::RedisError(_) => {
                "Internal server error".to_string()
            }
            AppError::InternalError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::UserError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.code(),
                "message": self.public_message(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
