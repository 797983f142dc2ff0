//! 토큰 응답 DTO
//!
//! 토큰 교환은 엔진(또는 애플리케이션) 소관이며, 전략은 교환 결과를
//! 받아 프로필을 만들고 나머지 필드를 그대로 verify 콜백에 넘깁니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `POST {base_url}/oauth2/token` 응답
///
/// `access_token`, `refresh_token`을 제외한 필드는 provider별 extra params 타입 `E`로
/// 역직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse<E> {
    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(flatten)]
    pub extra_params: E,
}

/// Asgardeo 토큰 응답의 extra params
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsgardeoExtraParams {
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: u64,

    /// `openid` scope를 요청한 경우에만 발급
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// 실제로 승인된 scope
    #[serde(default)]
    pub scope: String,

    /// 항상 `Bearer`
    pub token_type: String,

    /// 그 밖의 응답 필드
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
