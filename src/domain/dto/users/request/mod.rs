//! 사용자 요청 DTO
//!
//! - [`UpdateUserRequest`] - `PUT /api/user/update/{userId}` 요청 본문
//! - [`SearchUserQuery`] - `GET /api/user/search?name=` 쿼리 문자열

pub mod update_user_request;
pub mod search_user_query;

pub use update_user_request::UpdateUserRequest;
pub use search_user_query::SearchUserQuery;
