use crate::domain::dto::users::UserDto;
use crate::domain::entities::users::User;

/// `User` 엔티티를 응답용 [`UserDto`]로 변환합니다.
///
/// 상태가 없으므로 `web::Data`에 한 번 등록해 모든 워커가 공유합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDtoMapper;

impl UserDtoMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn to_user_dto(&self, user: &User) -> UserDto {
        UserDto::from(user.clone())
    }

    /// 여러 사용자를 한 번에 변환합니다. 입력 순서를 그대로 유지합니다.
    pub fn to_user_dtos<I>(&self, users: I) -> Vec<UserDto>
    where
        I: IntoIterator<Item = User>,
    {
        users.into_iter().map(UserDto::from).collect()
    }
}
