//! 로그아웃 리다이렉트 URL
//!
//! 애플리케이션 세션을 정리한 뒤 사용자를 Asgardeo 로그아웃 엔드포인트로 보낼 때 사용합니다.
//! 세션 파기 자체는 호출자 몫입니다.

use crate::errors::errors::{AppError, AppResult};
use crate::utils::query_params::ParameterSet;
use crate::utils::string_utils::validate_required_string;

/// `client_id`와 `returnTo`를 붙인 로그아웃 URL을 만듭니다.
///
/// 엔드포인트에 이미 있던 쿼리 파라미터와 fragment는 유지됩니다.
///
/// # Errors
///
/// * `AppError::ConfigurationError` - 로그아웃 엔드포인트가 비어 있거나 절대 URL이 아닌 경우
pub fn build_logout_url(logout_endpoint: &str, client_id: &str, return_to: &str) -> AppResult<String> {
    let endpoint = validate_required_string(logout_endpoint, "logout_url")?;

    let invalid = |e: url::ParseError| {
        AppError::ConfigurationError(format!("로그아웃 URL이 올바르지 않습니다 ({}): {}", endpoint, e))
    };

    let mut params = ParameterSet::from_url(&endpoint).map_err(invalid)?;
    params.set("client_id", client_id);
    params.set("returnTo", return_to);

    params.apply_to(&endpoint).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_logout_url() {
        let url = build_logout_url(
            "https://api.asgardeo.io/t/demoorg/oidc/logout",
            "CLIENT_ID",
            "https://example.app",
        )
        .unwrap();

        assert_eq!(
            url,
            "https://api.asgardeo.io/t/demoorg/oidc/logout?client_id=CLIENT_ID&returnTo=https%3A%2F%2Fexample.app"
        );
    }

    #[test]
    fn test_existing_query_is_kept() {
        let url = build_logout_url(
            "https://api.asgardeo.io/t/demoorg/oidc/logout?ui_locales=ko&client_id=old",
            "CLIENT_ID",
            "",
        )
        .unwrap();

        let params = ParameterSet::from_url(&url).unwrap();
        assert_eq!(params.get("ui_locales"), Some("ko"));
        assert_eq!(params.get("client_id"), Some("CLIENT_ID"));
        assert_eq!(params.get("returnTo"), Some(""));
    }

    #[test]
    fn test_fragment_is_kept() {
        let url = build_logout_url(
            "https://api.asgardeo.io/t/demoorg/oidc/logout#section",
            "CLIENT_ID",
            "https://example.app",
        )
        .unwrap();

        assert_eq!(
            url,
            "https://api.asgardeo.io/t/demoorg/oidc/logout?client_id=CLIENT_ID&returnTo=https%3A%2F%2Fexample.app#section"
        );
    }

    #[test]
    fn test_empty_endpoint_is_rejected() {
        assert!(matches!(
            build_logout_url("  ", "CLIENT_ID", "https://example.app"),
            Err(AppError::ConfigurationError(_))
        ));
        assert!(matches!(
            build_logout_url("/oidc/logout", "CLIENT_ID", "https://example.app"),
            Err(AppError::ConfigurationError(_))
        ));
    }
}
