use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 사용자 정보 수정 요청
///
/// 모든 필드는 선택 사항이며, 전달되지 않은 필드는 기존 값을 유지합니다.
///
/// ```json
/// {
///   "username": "new_name",
///   "profilePicture": "https://cdn.teamsphere.co/avatars/1.png",
///   "bio": "Backend engineer"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[validate(url(message = "유효한 프로필 이미지 URL을 입력해주세요"))]
    pub profile_picture: Option<String>,

    #[validate(length(max = 500, message = "소개글은 500자 이하여야 합니다"))]
    pub bio: Option<String>,
}

impl UpdateUserRequest {
    /// 변경할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.profile_picture.is_none() && self.bio.is_none()
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어, 마침표만 사용 가능합니다".into()));
    }
    Ok(())
}
