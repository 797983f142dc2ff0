//! Asgardeo OAuth 2.0 / OpenID Connect 전략
//!
//! 일반 OAuth2 인증 흐름을 Asgardeo의 엔드포인트 규약과 사용자 프로필 스키마에
//! 맞춰주는 전략 크레이트입니다. 리다이렉트/콜백/토큰 교환 프로토콜은 엔진이 담당하고,
//! 이 크레이트의 전략은 두 가지 정책만 제공합니다.
//!
//! # Features
//!
//! - **인가 파라미터 구성**: `scope`, `audience`, `organization` 쿼리 파라미터
//! - **프로필 정규화**: user-info 응답 → provider 독립적인 프로필
//! - **scope 기반 조회 생략**: `openid`가 없으면 user-info를 조회하지 않음
//! - **환경 변수 설정**: `.env` / `ASGARDEO_*` 변수로 전략 구성
//! - **로그아웃 URL**: `client_id`, `returnTo`를 붙인 로그아웃 리다이렉트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Application   │ ← 라우팅, 세션, 토큰 교환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  OAuth2Engine   │ ← 리다이렉트 생성, verify 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │AsgardeoStrategy │ ← 인가 파라미터, 프로필 정규화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Asgardeo (IdP)  │ ← /oauth2/userinfo
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use asgardeo_auth_strategy::config::AsgardeoEnvConfig;
//! use asgardeo_auth_strategy::services::{AsgardeoStrategy, OAuth2Engine};
//!
//! let env_config = AsgardeoEnvConfig::from_env()?;
//! let strategy = AsgardeoStrategy::new(env_config.strategy_options())?;
//! let engine = OAuth2Engine::new(strategy, FindOrCreateUser::new(user_repo));
//!
//! // 로그인: 인가 엔드포인트로 리다이렉트
//! let redirect = engine.authorization_redirect(&request_url)?;
//!
//! // 콜백: 토큰 교환 결과로 사용자 확정
//! let user = engine.authenticate(&request_url, token_response, None).await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::{AsgardeoEnvConfig, ScopeOption, StrategyConfig, StrategyOptions};
pub use domain::{AsgardeoExtraParams, AsgardeoProfile, AsgardeoUserInfo, TokenResponse};
pub use errors::{AppError, AppResult};
pub use services::{AsgardeoStrategy, OAuth2Engine, OAuth2Strategy, Verify, VerifyParams};
