//! # Strategy Configuration
//!
//! Asgardeo 전략의 생성자 입력([`StrategyOptions`])과 검증/정규화가 끝난
//! 불변 설정값([`StrategyConfig`])을 정의합니다.
//!
//! ## 정규화 규칙
//!
//! | 입력 | 결과 |
//! |------|------|
//! | scope 없음 (또는 빈 문자열) | `["openid", "profile", "email"]` |
//! | scope 문자열 `"a b"` | 공백 한 칸 기준 분할 → `["a", "b"]` |
//! | scope 목록 | 그대로 사용 |
//! | audience / organization 빈 문자열 | 미설정으로 취급 (그 외 값은 trim 없이 그대로) |
//! | base URL 끝의 `/` | 제거 후 엔드포인트 조합 |
//!
//! `fetch_profile` 플래그는 생성 시 한 번만 계산되고 이후 변경되지 않습니다.
//! scope 토큰 중 정확히 `openid`가 있을 때만 true 입니다.
//!
//! ## 엔드포인트
//!
//! ```text
//! {base_url}/oauth2/authorize   ← 인가 요청 (엔진이 리다이렉트)
//! {base_url}/oauth2/token       ← 토큰 교환 (엔진 소관)
//! {base_url}/oauth2/userinfo    ← 프로필 조회 (전략 소관)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::mask_secret;

/// 전략 이름이자 프로필의 provider 태그
pub const ASGARDEO_STRATEGY_NAME: &str = "asgardeo";

/// scope 미지정 시 기본값
pub const DEFAULT_SCOPE: &str = "openid profile email";

/// scope 구분자 (공백 한 칸)
pub const SCOPE_SEPARATOR: &str = " ";

/// user-info 조회를 허용하는 scope 토큰
pub const OPENID_SCOPE: &str = "openid";

/// scope 입력 형태
///
/// 문자열 또는 문자열 목록을 모두 받습니다. JSON/설정 파일에서는
/// `"openid profile"`과 `["openid", "profile"]` 두 형태 모두 역직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeOption {
    List(Vec<String>),
    Delimited(String),
}

impl From<&str> for ScopeOption {
    fn from(value: &str) -> Self {
        ScopeOption::Delimited(value.to_string())
    }
}

impl From<String> for ScopeOption {
    fn from(value: String) -> Self {
        ScopeOption::Delimited(value)
    }
}

impl From<Vec<String>> for ScopeOption {
    fn from(value: Vec<String>) -> Self {
        ScopeOption::List(value)
    }
}

impl From<Vec<&str>> for ScopeOption {
    fn from(value: Vec<&str>) -> Self {
        ScopeOption::List(value.into_iter().map(str::to_string).collect())
    }
}

/// scope 입력을 목록으로 정규화합니다.
///
/// 문자열은 공백 한 칸 기준으로만 분할하므로, 분할 후 다시
/// [`SCOPE_SEPARATOR`]로 합치면 원래 문자열이 복원됩니다.
pub fn normalize_scope(scope: Option<ScopeOption>) -> Vec<String> {
    match scope {
        Some(ScopeOption::List(scopes)) => scopes,
        Some(ScopeOption::Delimited(scope)) if !scope.is_empty() => {
            scope.split(SCOPE_SEPARATOR).map(str::to_string).collect()
        }
        _ => DEFAULT_SCOPE.split(SCOPE_SEPARATOR).map(str::to_string).collect(),
    }
}

/// 목록 원소 안에 공백으로 묶인 토큰까지 포함해 `openid`가 있는지 확인합니다.
fn requests_openid(scopes: &[String]) -> bool {
    scopes
        .iter()
        .flat_map(|scope| scope.split(SCOPE_SEPARATOR))
        .any(|token| token == OPENID_SCOPE)
}

/// Asgardeo 전략 생성자 입력
///
/// 애플리케이션이 직접 채우거나 [`AsgardeoEnvConfig`](super::env_config::AsgardeoEnvConfig)
/// 에서 만들어집니다. [`StrategyConfig::from_options`]에서 `validator` 규칙으로 검증됩니다.
#[derive(Clone, Deserialize, Validate)]
pub struct StrategyOptions {
    /// 테넌트 기준 URL (예: `https://api.asgardeo.io/t/demoorg`)
    #[validate(url(message = "base_url은 유효한 URL이어야 합니다"))]
    pub base_url: String,

    #[validate(length(min = 1, message = "client_id가 필요합니다"))]
    pub client_id: String,

    #[validate(length(min = 1, message = "client_secret이 필요합니다"))]
    pub client_secret: String,

    /// 인가 후 돌아올 콜백 URL
    #[validate(url(message = "authorized_redirect_url은 유효한 URL이어야 합니다"))]
    pub authorized_redirect_url: String,

    #[serde(default)]
    pub scope: Option<ScopeOption>,

    #[serde(default)]
    pub audience: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,
}

impl StrategyOptions {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        authorized_redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            authorized_redirect_url: authorized_redirect_url.into(),
            scope: None,
            audience: None,
            organization: None,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<ScopeOption>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}

impl fmt::Debug for StrategyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyOptions")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("authorized_redirect_url", &self.authorized_redirect_url)
            .field("scope", &self.scope)
            .field("audience", &self.audience)
            .field("organization", &self.organization)
            .finish()
    }
}

/// 일반 OAuth2 엔진이 사용하는 클라이언트 설정
///
/// 인가/토큰 엔드포인트와 클라이언트 자격 증명, 콜백 URL을 담습니다.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuth2ClientConfig {
    pub authorization_url: String,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

impl fmt::Debug for OAuth2ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2ClientConfig")
            .field("authorization_url", &self.authorization_url)
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

/// 검증과 정규화가 끝난 불변 전략 설정
///
/// 생성 이후에는 읽기 전용이므로 여러 요청에서 동시에 공유해도 안전합니다.
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    client: OAuth2ClientConfig,
    user_info_url: String,
    scopes: Vec<String>,
    audience: Option<String>,
    organization: Option<String>,
    fetch_profile: bool,
}

impl StrategyConfig {
    /// 입력을 검증하고 엔드포인트, scope, `fetch_profile`을 확정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - URL 형식 오류, 자격 증명 누락
    pub fn from_options(options: StrategyOptions) -> AppResult<Self> {
        options
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let StrategyOptions {
            base_url,
            client_id,
            client_secret,
            authorized_redirect_url,
            scope,
            audience,
            organization,
        } = options;

        let base_url = base_url.trim_end_matches('/');
        let scopes = normalize_scope(scope);
        let fetch_profile = requests_openid(&scopes);

        Ok(Self {
            client: OAuth2ClientConfig {
                authorization_url: format!("{}/oauth2/authorize", base_url),
                token_url: format!("{}/oauth2/token", base_url),
                client_id,
                client_secret,
                callback_url: authorized_redirect_url,
            },
            user_info_url: format!("{}/oauth2/userinfo", base_url),
            scopes,
            // 빈 문자열만 미설정. 공백 포함 값은 IdP가 판단하도록 그대로 전달
            audience: audience.filter(|value| !value.is_empty()),
            organization: organization.filter(|value| !value.is_empty()),
            fetch_profile,
        })
    }

    pub fn client(&self) -> &OAuth2ClientConfig {
        &self.client
    }

    pub fn user_info_url(&self) -> &str {
        &self.user_info_url
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// 인가 요청에 실리는 `scope` 값
    pub fn scope_string(&self) -> String {
        self.scopes.join(SCOPE_SEPARATOR)
    }

    pub fn audience(&self) -> Option<&str> {
        self.audience.as_deref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// user-info 엔드포인트를 조회할지 여부
    pub fn fetch_profile(&self) -> bool {
        self.fetch_profile
    }
}

impl TryFrom<StrategyOptions> for StrategyConfig {
    type Error = AppError;

    fn try_from(options: StrategyOptions) -> Result<Self, Self::Error> {
        Self::from_options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_options() -> StrategyOptions {
        StrategyOptions::new(
            "https://api.asgardeo.io/t/demoorg",
            "CLIENT_ID",
            "CLIENT_SECRET",
            "https://example.app/callback",
        )
    }

    #[test]
    fn test_default_scope() {
        let config = StrategyConfig::from_options(base_options()).unwrap();

        assert_eq!(config.scope_string(), "openid profile email");
        assert_eq!(config.scopes(), ["openid", "profile", "email"]);
        assert!(config.fetch_profile());
    }

    #[test]
    fn test_empty_string_scope_falls_back_to_default() {
        let config = StrategyConfig::from_options(base_options().with_scope("")).unwrap();
        assert_eq!(config.scope_string(), DEFAULT_SCOPE);
    }

    #[test]
    fn test_string_scope_roundtrip() {
        // 공백 한 칸 분할 → 재결합은 원문을 보존해야 함
        let inputs = ["custom", "openid profile email", "a  b", " leading", "trailing ", "x:y urn:foo"];
        for input in inputs {
            let scopes = normalize_scope(Some(ScopeOption::from(input)));
            assert_eq!(scopes.join(SCOPE_SEPARATOR), input, "scope `{}`", input);
        }
    }

    #[test]
    fn test_list_scope_is_used_verbatim() {
        let scopes = vec!["openid".to_string(), "internal_login".to_string()];
        let config = StrategyConfig::from_options(base_options().with_scope(scopes.clone())).unwrap();

        assert_eq!(config.scopes(), scopes.as_slice());
        assert_eq!(config.scope_string(), "openid internal_login");
    }

    #[test]
    fn test_fetch_profile_requires_openid_token() {
        let cases = [
            (ScopeOption::from("custom"), false),
            (ScopeOption::from("openid"), true),
            (ScopeOption::from("profile email"), false),
            (ScopeOption::from("openid_extra profile"), false),
            (ScopeOption::from(vec!["profile", "openid"]), true),
            (ScopeOption::from(vec!["openid profile"]), true),
            (ScopeOption::List(Vec::new()), false),
        ];

        for (scope, expected) in cases {
            let config = StrategyConfig::from_options(base_options().with_scope(scope.clone())).unwrap();
            assert_eq!(config.fetch_profile(), expected, "scope {:?}", scope);
        }
    }

    #[test]
    fn test_endpoints_are_derived_from_base_url() {
        let config = StrategyConfig::from_options(base_options()).unwrap();

        assert_eq!(config.client().authorization_url, "https://api.asgardeo.io/t/demoorg/oauth2/authorize");
        assert_eq!(config.client().token_url, "https://api.asgardeo.io/t/demoorg/oauth2/token");
        assert_eq!(config.user_info_url(), "https://api.asgardeo.io/t/demoorg/oauth2/userinfo");
        assert_eq!(config.client().callback_url, "https://example.app/callback");
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let mut options = base_options();
        options.base_url = "https://api.asgardeo.io/t/demoorg/".to_string();
        let config = StrategyConfig::from_options(options).unwrap();

        assert_eq!(config.user_info_url(), "https://api.asgardeo.io/t/demoorg/oauth2/userinfo");
    }

    #[test]
    fn test_empty_audience_and_organization_are_absent() {
        let config = StrategyConfig::from_options(
            base_options().with_audience("").with_organization(""),
        )
        .unwrap();

        assert_eq!(config.audience(), None);
        assert_eq!(config.organization(), None);

        let config = StrategyConfig::from_options(
            base_options().with_audience("  ").with_organization(" SOME_ORG "),
        )
        .unwrap();

        assert_eq!(config.audience(), Some("  "));
        assert_eq!(config.organization(), Some(" SOME_ORG "));

        let config = StrategyConfig::from_options(
            base_options().with_audience("SOME_AUDIENCE").with_organization("SOME_ORG"),
        )
        .unwrap();

        assert_eq!(config.audience(), Some("SOME_AUDIENCE"));
        assert_eq!(config.organization(), Some("SOME_ORG"));
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let mut options = base_options();
        options.base_url = "not a url".to_string();
        assert!(matches!(
            StrategyConfig::from_options(options),
            Err(AppError::ValidationError(_))
        ));

        let mut options = base_options();
        options.client_id = String::new();
        assert!(matches!(
            StrategyConfig::try_from(options),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_options_deserialize_both_scope_forms() {
        let json = r#"{
            "base_url": "https://api.asgardeo.io/t/demoorg",
            "client_id": "CLIENT_ID",
            "client_secret": "CLIENT_SECRET",
            "authorized_redirect_url": "https://example.app/callback",
            "scope": ["openid", "groups"]
        }"#;
        let options: StrategyOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.scope, Some(ScopeOption::from(vec!["openid", "groups"])));

        let json = r#"{
            "base_url": "https://api.asgardeo.io/t/demoorg",
            "client_id": "CLIENT_ID",
            "client_secret": "CLIENT_SECRET",
            "authorized_redirect_url": "https://example.app/callback",
            "scope": "openid groups",
            "organization": "SOME_ORG"
        }"#;
        let options: StrategyOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.scope, Some(ScopeOption::from("openid groups")));
        assert_eq!(options.audience, None);
        assert_eq!(options.organization.as_deref(), Some("SOME_ORG"));
    }

    #[test]
    fn test_debug_masks_client_secret() {
        let config = StrategyConfig::from_options(base_options()).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("CLIENT_SECRET"));
        assert!(rendered.contains("CLIENT_ID"));
    }
}
