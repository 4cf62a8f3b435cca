//! 엔티티 → DTO 변환기

pub mod user_dto_mapper;

pub use user_dto_mapper::UserDtoMapper;
