//! # Data Transfer Objects (DTO) Module
//!
//! 엔진과 호출자 사이를 오가는 요청/응답 타입입니다.

pub mod authorization;
pub mod token_response;

pub use authorization::AuthorizationRedirect;
pub use token_response::{AsgardeoExtraParams, TokenResponse};
