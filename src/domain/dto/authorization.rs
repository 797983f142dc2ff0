//! 인가 리다이렉트 DTO

use serde::Serialize;

/// 엔진이 만든 인가 요청 리다이렉트
///
/// `state`는 콜백 검증을 위해 호출자가 세션에 보관해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationRedirect {
    pub url: String,
    pub state: String,
}
