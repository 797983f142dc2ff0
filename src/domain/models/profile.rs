//! # 정규화된 사용자 프로필
//!
//! provider 고유 스키마와 무관하게 verify 콜백에 전달되는 프로필 형태입니다.
//! JSON 직렬화 시 필드 이름은 camelCase, 원본 user-info는 `_json` 키로 나갑니다.
//!
//! ```json
//! {
//!   "provider": "asgardeo",
//!   "id": "248289761001",
//!   "displayName": "John Doe",
//!   "name": { "familyName": "Doe", "givenName": "John", "middleName": "Alexander" },
//!   "emails": [{ "value": "janedoe@exampleco.com" }],
//!   "photos": [{ "value": "http://exampleco.com/janedoe/me.jpg" }],
//!   "organizationId": "some-Asgardeo-organization-id",
//!   "organizationName": "some-Asgardeo-organization-name",
//!   "_json": { "...": "원본 user-info" }
//! }
//! ```
//!
//! 값이 없는 필드는 직렬화 결과에 아예 나타나지 않습니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::strategy_config::ASGARDEO_STRATEGY_NAME;
use crate::domain::models::user_info::AsgardeoUserInfo;
use crate::errors::errors::{AppError, AppResult};

/// 구조화된 이름
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
}

/// `emails`, `photos` 목록의 원소
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileValue {
    pub value: String,
}

impl ProfileValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Asgardeo 정규화 프로필
///
/// 인증 시도마다 새로 만들어지고, 반환 후에는 변경되지 않으며
/// 소유권은 verify 콜백으로 넘어갑니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsgardeoProfile {
    /// 항상 `"asgardeo"`
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ProfileName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<ProfileValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<ProfileValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    /// user-info 응답 원본
    #[serde(rename = "_json", default, skip_serializing_if = "Option::is_none")]
    pub json: Option<Value>,
}

impl AsgardeoProfile {
    /// provider 태그만 있는 빈 프로필
    pub fn new() -> Self {
        Self {
            provider: ASGARDEO_STRATEGY_NAME.to_string(),
            id: None,
            display_name: None,
            name: None,
            emails: None,
            photos: None,
            organization_id: None,
            organization_name: None,
            json: None,
        }
    }

    /// 첫 번째 이메일 주소
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .as_ref()
            .and_then(|emails| emails.first())
            .map(|email| email.value.as_str())
    }

    /// `_json`을 타입 있는 클레임으로 읽습니다. user-info를 조회하지 않았다면 `None`.
    ///
    /// # Errors
    ///
    /// * `AppError::DeserializationError` - 원본이 JSON 객체가 아니거나 클레임 타입 불일치
    pub fn user_info(&self) -> AppResult<Option<AsgardeoUserInfo>> {
        self.json
            .as_ref()
            .map(|raw| serde_json::from_value(raw.clone()))
            .transpose()
            .map_err(|e| AppError::DeserializationError(format!("user-info 클레임 변환 실패: {}", e)))
    }
}

impl Default for AsgardeoProfile {
    fn default() -> Self {
        Self::new()
    }
}
