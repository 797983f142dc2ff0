//! # Domain Models
//!
//! - [`user_info`] - Asgardeo user-info 응답 클레임
//! - [`profile`] - verify 콜백으로 전달되는 정규화 프로필

pub mod profile;
pub mod user_info;

pub use profile::{AsgardeoProfile, ProfileName, ProfileValue};
pub use user_info::{AsgardeoUserInfo, UserAddress};
