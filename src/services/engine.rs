//! # OAuth2 Engine
//!
//! 전략의 두 확장 지점을 호출하는 일반 OAuth2 엔진입니다.
//!
//! - **인가 리다이렉트**: 들어온 요청의 쿼리를 유지한 채 전략 파라미터와
//!   `response_type`, `client_id`, `redirect_uri`, `state`를 붙여 인가 URL을 만듭니다.
//! - **인증 완료**: 이미 교환된 토큰 응답으로 전략이 프로필을 만들게 하고,
//!   그 결과를 verify 콜백에 넘깁니다.
//!
//! state 검증과 코드 교환, 세션 저장은 호출자 몫입니다.
//!
//! ```rust,ignore
//! let engine = OAuth2Engine::new(AsgardeoStrategy::new(options)?, FindOrCreateUser::new(repo));
//!
//! // 로그인 요청
//! let redirect = engine.authorization_redirect("https://example.app/auth/asgardeo?test=1")?;
//! session.insert("oauth2:state", &redirect.state);
//!
//! // 콜백 (토큰 교환 후)
//! let user = engine.authenticate(&callback_url, token_response, None).await?;
//! ```

use serde_json::Value;

use crate::domain::dto::authorization::AuthorizationRedirect;
use crate::domain::dto::token_response::TokenResponse;
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::services::strategy::{OAuth2Strategy, Verify, VerifyParams};
use crate::utils::query_params::ParameterSet;

/// 전략 하나와 verify 콜백 하나를 묶은 엔진
pub struct OAuth2Engine<S, V> {
    strategy: S,
    verify: V,
}

impl<S, V> OAuth2Engine<S, V>
where
    S: OAuth2Strategy,
    V: Verify<S::Profile, S::ExtraParams>,
{
    pub fn new(strategy: S, verify: V) -> Self {
        Self { strategy, verify }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// 인가 엔드포인트로 보낼 리다이렉트를 만듭니다.
    ///
    /// `request_url`의 기존 쿼리 파라미터는 그대로 유지됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `request_url`이 절대 URL이 아닌 경우
    pub fn authorization_redirect(&self, request_url: &str) -> AppResult<AuthorizationRedirect> {
        let client = self.strategy.client_config();
        let state = generate_state();

        let mut params = ParameterSet::from_url(request_url)
            .map_err(|e| AppError::ValidationError(format!("요청 URL 파싱 실패: {}", e)))?;
        self.strategy.compose_authorization_params(&mut params);
        params.set("response_type", "code");
        params.set("client_id", &client.client_id);
        params.set("redirect_uri", &client.callback_url);
        params.set("state", &state);

        // 인가 엔드포인트는 검증된 base URL에서 파생되므로 실패는 내부 오류
        let url = params
            .apply_to(&client.authorization_url)
            .with_context(|| format!("인가 URL 생성 실패 ({})", client.authorization_url))?;

        log::debug!(
            "{} 인가 리다이렉트 생성 - 파라미터 {}개",
            self.strategy.name(),
            params.len()
        );

        Ok(AuthorizationRedirect { url, state })
    }

    /// 토큰 교환 결과로 프로필을 만들고 verify 콜백을 호출합니다.
    ///
    /// 프로필 생성이 실패하면 verify는 호출되지 않고 에러가 그대로 반환됩니다.
    pub async fn authenticate(
        &self,
        request_url: &str,
        token: TokenResponse<S::ExtraParams>,
        context: Option<Value>,
    ) -> AppResult<V::User> {
        let TokenResponse {
            access_token,
            refresh_token,
            extra_params,
        } = token;

        let profile = self
            .strategy
            .derive_profile(&access_token)
            .await
            .inspect_err(|e| log::warn!("{} 프로필 생성 실패: {}", self.strategy.name(), e))?;

        let user = self
            .verify
            .verify(VerifyParams {
                access_token,
                refresh_token,
                request: request_url.to_string(),
                extra_params,
                profile,
                context,
            })
            .await?;

        log::info!("{} 인증 완료", self.strategy.name());
        Ok(user)
    }
}

fn generate_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
