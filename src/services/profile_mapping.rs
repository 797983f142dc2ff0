//! # Claim → Profile 매핑
//!
//! user-info 클레임을 [`AsgardeoProfile`] 필드로 옮기는 선언적 매핑 테이블입니다.
//! 새 클레임을 프로필에 노출하려면 [`CLAIM_MAPPINGS`]에 한 줄을 추가하면 됩니다.
//!
//! | 클레임 | 프로필 필드 | 변환 |
//! |--------|-------------|------|
//! | `sub` | `id` | 복사 |
//! | `name` | `displayName` | 복사 |
//! | `family_name` | `name.familyName` | 복사 |
//! | `given_name` | `name.givenName` | 복사 |
//! | `middle_name` | `name.middleName` | 복사 |
//! | `email` | `emails` | `[{ value }]` |
//! | `picture` | `photos` | `[{ value }]` |
//! | `org_id` | `organizationId` | 복사 |
//! | `org_name` | `organizationName` | 복사 |
//!
//! 각 항목은 독립적으로 적용되며 클레임이 비어 있지 않은 문자열이거나 0이 아닌 숫자일 때만
//! 반영됩니다 (숫자는 문자열로 변환). `true`나 객체/배열 클레임은 문자열 필드에 담을 수 없어
//! 건너뛰며 `_json`으로만 접근할 수 있습니다.
//! `name` 객체는 세 이름 클레임 중 하나라도 반영될 때만 만들어집니다.
//! 원본 JSON은 항상 `_json`에 그대로 붙습니다.

use serde_json::Value;

use crate::domain::models::profile::{AsgardeoProfile, ProfileName, ProfileValue};

/// 클레임이 옮겨갈 프로필 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Id,
    DisplayName,
    FamilyName,
    GivenName,
    MiddleName,
    Email,
    Photo,
    OrganizationId,
    OrganizationName,
}

impl ProfileField {
    fn apply(self, profile: &mut AsgardeoProfile, value: &str) {
        let value = value.to_string();
        match self {
            ProfileField::Id => profile.id = Some(value),
            ProfileField::DisplayName => profile.display_name = Some(value),
            ProfileField::FamilyName => name_mut(profile).family_name = Some(value),
            ProfileField::GivenName => name_mut(profile).given_name = Some(value),
            ProfileField::MiddleName => name_mut(profile).middle_name = Some(value),
            ProfileField::Email => profile.emails = Some(vec![ProfileValue::new(value)]),
            ProfileField::Photo => profile.photos = Some(vec![ProfileValue::new(value)]),
            ProfileField::OrganizationId => profile.organization_id = Some(value),
            ProfileField::OrganizationName => profile.organization_name = Some(value),
        }
    }
}

fn name_mut(profile: &mut AsgardeoProfile) -> &mut ProfileName {
    profile.name.get_or_insert_with(ProfileName::default)
}

/// 클레임 하나의 매핑 규칙
#[derive(Debug, Clone, Copy)]
pub struct ClaimMapping {
    pub claim: &'static str,
    pub field: ProfileField,
}

pub const CLAIM_MAPPINGS: &[ClaimMapping] = &[
    ClaimMapping { claim: "sub", field: ProfileField::Id },
    ClaimMapping { claim: "name", field: ProfileField::DisplayName },
    ClaimMapping { claim: "family_name", field: ProfileField::FamilyName },
    ClaimMapping { claim: "given_name", field: ProfileField::GivenName },
    ClaimMapping { claim: "middle_name", field: ProfileField::MiddleName },
    ClaimMapping { claim: "email", field: ProfileField::Email },
    ClaimMapping { claim: "picture", field: ProfileField::Photo },
    ClaimMapping { claim: "org_id", field: ProfileField::OrganizationId },
    ClaimMapping { claim: "org_name", field: ProfileField::OrganizationName },
];

/// user-info 원본 JSON으로 정규화 프로필을 만듭니다.
///
/// 순수 함수이며 실패하지 않습니다. 객체가 아닌 JSON이면 `_json`만 채워집니다.
pub fn normalize_user_info(data: Value) -> AsgardeoProfile {
    let mut profile = AsgardeoProfile::new();

    for mapping in CLAIM_MAPPINGS {
        if let Some(value) = data.get(mapping.claim).and_then(claim_text) {
            mapping.field.apply(&mut profile, &value);
        }
    }

    profile.json = Some(data);
    profile
}

/// 반영 대상 클레임 값을 문자열로 꺼냅니다.
///
/// 빈 문자열, `0`, `null`, `false`는 값이 없는 것으로 봅니다.
/// 숫자형 `sub`를 내려주는 IdP가 있어 숫자도 받습니다.
fn claim_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}
