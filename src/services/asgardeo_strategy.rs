//! # Asgardeo OAuth 2.0 / OpenID Connect 전략
//!
//! Asgardeo 엔드포인트 규약과 user-info 스키마에 맞춘 [`OAuth2Strategy`] 구현입니다.
//! 리다이렉트, 콜백, 토큰 교환은 엔진 소관이며 이 전략은 두 가지만 담당합니다.
//!
//! 1. **인가 파라미터 구성** - `scope`, `audience`, `organization`
//! 2. **프로필 정규화** - user-info 조회 후 [`AsgardeoProfile`]로 변환
//!
//! ## user-info 조회 조건
//!
//! 설정된 scope에 `openid`가 없으면 user-info 엔드포인트가 해석 가능한 응답을
//! 보장하지 않으므로 조회 자체를 하지 않습니다. 이 판단은 생성 시 한 번만 이뤄지며
//! ([`StrategyConfig::fetch_profile`]), 이후 모든 호출은 provider 태그만 있는
//! 프로필을 즉시 반환합니다.
//!
//! ```text
//! derive_profile(token)
//!     │
//!     ├─ fetch_profile == false ──► { provider: "asgardeo" }
//!     │
//!     └─ GET {base_url}/oauth2/userinfo
//!          Authorization: Bearer <token>
//!            │
//!            ├─ 전송 실패 ─────────► ExternalServiceError
//!            ├─ 2xx 이외 응답 ─────► ExternalServiceError
//!            ├─ JSON 파싱 실패 ────► DeserializationError
//!            └─ 성공 ──────────────► normalize_user_info(json)
//! ```
//!
//! 재시도나 기본 프로필 대체는 없습니다. 타임아웃은 주입한 `reqwest::Client` 설정을 따릅니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use asgardeo_auth_strategy::config::StrategyOptions;
//! use asgardeo_auth_strategy::services::AsgardeoStrategy;
//!
//! let strategy = AsgardeoStrategy::new(
//!     StrategyOptions::new(
//!         "https://api.asgardeo.io/t/demoorg",
//!         "CLIENT_ID",
//!         "CLIENT_SECRET",
//!         "https://example.app/callback",
//!     )
//!     .with_scope("openid profile email")
//!     .with_organization("SOME_ORG"),
//! )?;
//!
//! let profile = strategy.derive_profile(&access_token).await?;
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::config::strategy_config::{
    OAuth2ClientConfig, StrategyConfig, StrategyOptions, ASGARDEO_STRATEGY_NAME,
};
use crate::domain::dto::token_response::AsgardeoExtraParams;
use crate::domain::models::profile::AsgardeoProfile;
use crate::errors::errors::{AppError, AppResult};
use crate::services::profile_mapping::normalize_user_info;
use crate::services::strategy::OAuth2Strategy;
use crate::utils::query_params::ParameterSet;
use crate::utils::string_utils::mask_secret;

/// Asgardeo 전략
///
/// 생성 이후 불변이므로 `Arc`로 감싸 여러 요청에서 동시에 재사용할 수 있습니다.
#[derive(Debug, Clone)]
pub struct AsgardeoStrategy {
    config: StrategyConfig,
    http: reqwest::Client,
}

impl AsgardeoStrategy {
    /// 기본 `reqwest::Client`로 전략을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - URL 형식 오류, 자격 증명 누락
    pub fn new(options: StrategyOptions) -> AppResult<Self> {
        Self::with_http_client(options, reqwest::Client::new())
    }

    /// 타임아웃, 프록시 등을 설정한 HTTP 클라이언트를 주입합니다.
    pub fn with_http_client(options: StrategyOptions, http: reqwest::Client) -> AppResult<Self> {
        let config = StrategyConfig::from_options(options)?;

        log::info!(
            "Asgardeo 전략 생성 - client_id: {}, scope: {}, fetch_profile: {}",
            config.client().client_id,
            config.scope_string(),
            config.fetch_profile()
        );

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// user-info 엔드포인트 조회
    async fn fetch_user_info(&self, access_token: &str) -> AppResult<Value> {
        let response = self
            .http
            .get(self.config.user_info_url())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Asgardeo 사용자 정보 요청 실패: {}", e);
                AppError::ExternalServiceError(format!("Asgardeo 사용자 정보 요청 실패: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!(
                "Asgardeo 사용자 정보 조회 실패 - status: {}, token: {}",
                status,
                mask_secret(access_token)
            );
            return Err(AppError::ExternalServiceError(format!(
                "Asgardeo 사용자 정보 조회 실패 ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Asgardeo 사용자 정보 응답 수신 실패: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::DeserializationError(format!("Asgardeo 사용자 정보 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl OAuth2Strategy for AsgardeoStrategy {
    type Profile = AsgardeoProfile;
    type ExtraParams = AsgardeoExtraParams;

    fn name(&self) -> &str {
        ASGARDEO_STRATEGY_NAME
    }

    fn client_config(&self) -> &OAuth2ClientConfig {
        self.config.client()
    }

    fn compose_authorization_params(&self, params: &mut ParameterSet) {
        params.set("scope", &self.config.scope_string());

        if let Some(audience) = self.config.audience() {
            params.set("audience", audience);
        }

        if let Some(organization) = self.config.organization() {
            params.set("organization", organization);
        }
    }

    async fn derive_profile(&self, access_token: &str) -> AppResult<AsgardeoProfile> {
        if !self.config.fetch_profile() {
            log::debug!("scope에 openid가 없어 사용자 정보 조회를 건너뜁니다");
            return Ok(AsgardeoProfile::new());
        }

        let data = self.fetch_user_info(access_token).await?;
        Ok(normalize_user_info(data))
    }
}
