//! # Domain Module
//!
//! - [`models`] - user-info 클레임과 정규화 프로필
//! - [`dto`] - 토큰 응답, 인가 리다이렉트

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
