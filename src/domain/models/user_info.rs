//! # Asgardeo UserInfo 모델
//!
//! `GET {base_url}/oauth2/userinfo` 응답의 OpenID Connect 표준 클레임과
//! Asgardeo 조직 클레임(`org_id`, `org_name`)을 담는 타입입니다.
//!
//! 정규화 단계는 원본 JSON을 그대로 다루고, 이 타입은 호출자가 프로필의
//! `_json`을 타입 있는 형태로 읽을 때 사용합니다
//! ([`AsgardeoProfile::user_info`](super::profile::AsgardeoProfile::user_info)).
//!
//! ## 스코프별 클레임
//!
//! | 스코프 | 클레임 |
//! |--------|--------|
//! | `openid` | `sub` |
//! | `profile` | `name`, `given_name`, `family_name`, `middle_name`, `nickname`, `picture`, ... |
//! | `email` | `email`, `email_verified` |
//! | `phone` | `phone_number`, `phone_number_verified` |
//! | `address` | `address` |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// UserInfo 응답의 주소 클레임
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// 그 밖의 주소 필드 (`locality`, `postal_code` 등)
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Asgardeo UserInfo 응답
///
/// 모든 클레임은 요청한 scope와 사용자 속성 설정에 따라 누락될 수 있으므로
/// 전부 `Option`입니다. 정의되지 않은 클레임은 `additional_claims`에 보존됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsgardeoUserInfo {
    /// 사용자 고유 식별자 (subject)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoneinfo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number_verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<UserAddress>,

    /// OIDC 표준은 숫자(epoch 초)지만 문자열로 내려오는 경우도 있어 원본 값을 유지
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,

    /// Asgardeo 조직 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,

    /// Asgardeo 조직 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,

    #[serde(flatten)]
    pub additional_claims: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_standard_claims() {
        let value = json!({
            "sub": "248289761001",
            "name": "John Doe",
            "email_verified": true,
            "address": { "country": "us", "locality": "Colombo" },
            "updated_at": "1556845729",
            "org_id": "some-Asgardeo-organization-id",
            "roles": ["admin"]
        });

        let info: AsgardeoUserInfo = serde_json::from_value(value).unwrap();

        assert_eq!(info.sub.as_deref(), Some("248289761001"));
        assert_eq!(info.email_verified, Some(true));
        assert_eq!(info.address.as_ref().and_then(|a| a.country.as_deref()), Some("us"));
        assert_eq!(info.address.as_ref().map(|a| a.other.contains_key("locality")), Some(true));
        assert_eq!(info.updated_at, Some(json!("1556845729")));
        assert_eq!(info.additional_claims.get("roles"), Some(&json!(["admin"])));
        assert_eq!(info.email, None);
    }

    #[test]
    fn test_numeric_updated_at() {
        let info: AsgardeoUserInfo = serde_json::from_value(json!({ "updated_at": 1556845729 })).unwrap();
        assert_eq!(info.updated_at, Some(json!(1556845729)));
    }
}
