//! # Services Module
//!
//! - [`strategy`] - 엔진과 전략 사이의 계약 (`OAuth2Strategy`, `Verify`)
//! - [`asgardeo_strategy`] - Asgardeo 전략 구현
//! - [`profile_mapping`] - user-info 클레임 → 프로필 매핑 테이블
//! - [`engine`] - 전략을 구동하는 일반 OAuth2 엔진
//! - [`logout`] - 로그아웃 리다이렉트 URL

pub mod asgardeo_strategy;
pub mod engine;
pub mod logout;
pub mod profile_mapping;
pub mod strategy;

pub use asgardeo_strategy::AsgardeoStrategy;
pub use engine::OAuth2Engine;
pub use logout::build_logout_url;
pub use profile_mapping::normalize_user_info;
pub use strategy::{OAuth2Strategy, Verify, VerifyParams};
