//! # Configuration Module
//!
//! Asgardeo 전략의 설정을 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`strategy_config`] - 생성자 입력(`StrategyOptions`)과 정규화된 불변 설정(`StrategyConfig`)
//! - [`env_config`] - 환경 변수 / `.env` 기반 설정 로더
//!
//! ## 설정 흐름
//!
//! ```text
//! 환경 변수 ──► AsgardeoEnvConfig ──┐
//!                                   ├──► StrategyOptions ──validate──► StrategyConfig
//! 애플리케이션 코드 ─────────────────┘                                   (fetch_profile 확정)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use asgardeo_auth_strategy::config::{AsgardeoEnvConfig, StrategyConfig};
//!
//! let env_config = AsgardeoEnvConfig::from_env()?;
//! let config = StrategyConfig::from_options(env_config.strategy_options())?;
//!
//! println!("authorize: {}", config.client().authorization_url);
//! println!("fetch profile: {}", config.fetch_profile());
//! ```

pub mod env_config;
pub mod strategy_config;

pub use env_config::AsgardeoEnvConfig;
pub use strategy_config::{
    normalize_scope, OAuth2ClientConfig, ScopeOption, StrategyConfig, StrategyOptions,
    ASGARDEO_STRATEGY_NAME, DEFAULT_SCOPE, OPENID_SCOPE, SCOPE_SEPARATOR,
};
