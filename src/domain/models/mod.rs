//! # Domain Models Module
//!
//! 엔티티나 API DTO가 아닌 외부 계약 모델을 정의합니다.
//!
//! - [`token`] - 인증 서비스가 발급한 JWT의 클레임 구조

pub mod token;
