//! 문자열 정규화 유틸리티
//!
//! 설정값 정리, 필수값 검증, 로그용 민감정보 마스킹을 담당합니다.

use crate::errors::errors::AppError;

/// 필수 문자열 검증
///
/// 앞뒤 공백을 제거한 값이 비어 있으면 `ConfigurationError`를 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ConfigurationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 정리
///
/// 공백만 있는 값은 `None`으로 취급합니다. audience, organization처럼
/// "설정되지 않음"과 "빈 값"을 구분하지 않는 옵션에 사용합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 로그 출력용 비밀값 마스킹
///
/// 앞 4글자만 남기고 나머지는 `*`로 가립니다. 8글자 이하의 값은 전부 가립니다.
///
/// ```rust
/// use asgardeo_auth_strategy::utils::string_utils::mask_secret;
///
/// assert_eq!(mask_secret("eyJhbGciOiJSUzI1NiJ9"), "eyJh****");
/// assert_eq!(mask_secret("short"), "****");
/// ```
pub fn mask_secret(value: &str) -> String {
    if value.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = value.chars().take(4).collect();
    format!("{}****", prefix)
}
