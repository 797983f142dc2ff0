//! # OAuth2 Strategy 인터페이스
//!
//! 일반 OAuth2 엔진([`OAuth2Engine`](super::engine::OAuth2Engine))과
//! provider 전략 사이의 계약입니다. 엔진은 리다이렉트/콜백 흐름을 소유하고,
//! 전략은 두 확장 지점만 제공합니다.
//!
//! ```text
//! ┌──────────────┐  compose_authorization_params(&mut ParameterSet)  ┌──────────────┐
//! │              ├───────────────────────────────────────────────────►│              │
//! │ OAuth2Engine │                                                    │   Strategy   │
//! │              ├───────────────────────────────────────────────────►│              │
//! └──────┬───────┘  derive_profile(access_token) -> Profile           └──────────────┘
//!        │
//!        │ verify(VerifyParams { access_token, refresh_token, request,
//!        ▼                       extra_params, profile, context })
//! ┌──────────────┐
//! │    Verify    │ ← 애플리케이션 콜백 (사용자 조회/생성)
//! └──────────────┘
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::strategy_config::OAuth2ClientConfig;
use crate::errors::errors::AppResult;
use crate::utils::query_params::ParameterSet;

/// provider 전략
#[async_trait]
pub trait OAuth2Strategy: Send + Sync {
    /// verify 콜백에 전달되는 정규화 프로필 타입
    type Profile: Send + 'static;

    /// 토큰 응답의 provider별 추가 필드 타입
    type ExtraParams: DeserializeOwned + Send + 'static;

    /// 전략 이름 (프로필 provider 태그와 동일)
    fn name(&self) -> &str;

    /// 엔진이 사용할 엔드포인트와 클라이언트 자격 증명
    fn client_config(&self) -> &OAuth2ClientConfig;

    /// 인가 요청 쿼리 파라미터에 provider 파라미터를 추가합니다.
    ///
    /// 이미 있는 다른 키는 건드리지 않습니다. 실패하지 않습니다.
    fn compose_authorization_params(&self, params: &mut ParameterSet);

    /// 토큰 교환 후 액세스 토큰으로 프로필을 만듭니다.
    async fn derive_profile(&self, access_token: &str) -> AppResult<Self::Profile>;
}

/// verify 콜백 인자
#[derive(Debug, Clone)]
pub struct VerifyParams<P, E> {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// 콜백 요청 URL
    pub request: String,
    pub extra_params: E,
    pub profile: P,
    /// 호출자가 `authenticate`에 넘긴 임의의 컨텍스트
    pub context: Option<Value>,
}

/// 애플리케이션 verify 콜백
///
/// 프로필로 애플리케이션 사용자를 찾거나 만들고, 거부할 때는
/// `AppError::AuthenticationError`를 반환합니다.
#[async_trait]
pub trait Verify<P, E>: Send + Sync
where
    P: Send + 'static,
    E: Send + 'static,
{
    type User: Send;

    async fn verify(&self, params: VerifyParams<P, E>) -> AppResult<Self::User>;
}
