//! # Asgardeo 환경 변수 설정
//!
//! 애플리케이션이 Asgardeo 전략을 환경 변수로 구성할 때 사용하는 로더입니다.
//! `.env` 파일이 있으면 `dotenv`로 먼저 읽어들입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export ASGARDEO_BASE_URL="https://api.asgardeo.io/t/demoorg"
//! export ASGARDEO_CLIENT_ID="your-client-id"
//! export ASGARDEO_CLIENT_SECRET="your-client-secret"
//! export ASGARDEO_REDIRECT_URL="https://example.app/auth/asgardeo/callback"
//!
//! # 선택
//! export ASGARDEO_SCOPE="openid profile email"   # 기본값과 동일
//! export ASGARDEO_AUDIENCE="SOME_AUDIENCE"
//! export ASGARDEO_ORGANIZATION="SOME_ORG"
//!
//! # 로그아웃 리다이렉트 (사용 시)
//! export ASGARDEO_LOGOUT_URL="https://api.asgardeo.io/t/demoorg/oidc/logout"
//! export ASGARDEO_RETURN_TO_URL="https://example.app"
//! ```
//!
//! 빈 문자열로 설정된 선택 변수는 설정되지 않은 것으로 취급합니다.

use std::env;
use std::path::Path;

use crate::config::strategy_config::{ScopeOption, StrategyOptions};
use crate::errors::errors::{AppError, AppResult};
use crate::services::logout::build_logout_url;
use crate::utils::string_utils::{clean_optional_string, validate_required_string};

pub const ENV_BASE_URL: &str = "ASGARDEO_BASE_URL";
pub const ENV_CLIENT_ID: &str = "ASGARDEO_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "ASGARDEO_CLIENT_SECRET";
pub const ENV_REDIRECT_URL: &str = "ASGARDEO_REDIRECT_URL";
pub const ENV_SCOPE: &str = "ASGARDEO_SCOPE";
pub const ENV_AUDIENCE: &str = "ASGARDEO_AUDIENCE";
pub const ENV_ORGANIZATION: &str = "ASGARDEO_ORGANIZATION";
pub const ENV_LOGOUT_URL: &str = "ASGARDEO_LOGOUT_URL";
pub const ENV_RETURN_TO_URL: &str = "ASGARDEO_RETURN_TO_URL";

/// 환경 변수에서 읽어들인 Asgardeo 설정
#[derive(Debug, Clone)]
pub struct AsgardeoEnvConfig {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub scope: Option<String>,
    pub audience: Option<String>,
    pub organization: Option<String>,
    pub logout_url: Option<String>,
    pub return_to_url: Option<String>,
}

impl AsgardeoEnvConfig {
    /// `.env`와 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// `.env` 파일이 없어도 실패하지 않습니다.
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();
        Self::from_process_env()
    }

    /// 지정한 env 파일을 읽어들인 뒤 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// 이미 설정된 프로세스 환경 변수는 파일 값으로 덮어쓰지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 파일을 읽을 수 없거나 필수 변수가 없는 경우
    pub fn from_env_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(|e| {
            AppError::ConfigurationError(format!("env 파일 로드 실패 ({}): {}", path.display(), e))
        })?;
        log::debug!("env 파일 로드 완료: {}", path.display());
        Self::from_process_env()
    }

    fn from_process_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 읽습니다.
    ///
    /// 프로세스 환경을 건드리지 않고 설정 로직을 검증할 때 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 필수 변수 누락 또는 공백
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> AppResult<String> {
            let value = lookup(key)
                .ok_or_else(|| AppError::ConfigurationError(format!("{} must be set", key)))?;
            validate_required_string(&value, key)
        };
        let optional = |key: &str| clean_optional_string(lookup(key));

        let config = Self {
            base_url: required(ENV_BASE_URL)?,
            client_id: required(ENV_CLIENT_ID)?,
            client_secret: required(ENV_CLIENT_SECRET)?,
            redirect_url: required(ENV_REDIRECT_URL)?,
            scope: optional(ENV_SCOPE),
            audience: optional(ENV_AUDIENCE),
            organization: optional(ENV_ORGANIZATION),
            logout_url: optional(ENV_LOGOUT_URL),
            return_to_url: optional(ENV_RETURN_TO_URL),
        };

        if config.scope.is_none() {
            log::debug!("{} not set, using default scope", ENV_SCOPE);
        }

        Ok(config)
    }

    /// 전략 생성자 입력으로 변환합니다.
    pub fn strategy_options(&self) -> StrategyOptions {
        StrategyOptions {
            base_url: self.base_url.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            authorized_redirect_url: self.redirect_url.clone(),
            scope: self.scope.clone().map(ScopeOption::Delimited),
            audience: self.audience.clone(),
            organization: self.organization.clone(),
        }
    }

    /// `ASGARDEO_LOGOUT_URL`에 `client_id`, `returnTo`를 붙인 로그아웃 URL
    ///
    /// `ASGARDEO_RETURN_TO_URL`이 없으면 `returnTo`는 빈 값으로 설정됩니다.
    pub fn logout_url(&self) -> AppResult<String> {
        let endpoint = self.logout_url.as_deref().ok_or_else(|| {
            AppError::ConfigurationError(format!("{} must be set", ENV_LOGOUT_URL))
        })?;

        build_logout_url(
            endpoint,
            &self.client_id,
            self.return_to_url.as_deref().unwrap_or_default(),
        )
    }
}
