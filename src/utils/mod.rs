//! # Utilities
//!
//! - [`query_params`] - 순서 보존 쿼리 파라미터 컬렉션
//! - [`string_utils`] - 설정값 정리 및 로그 마스킹

pub mod query_params;
pub mod string_utils;

pub use query_params::ParameterSet;
