//! # Strategy Error Handling
//!
//! Asgardeo 전략 전반에서 사용하는 통합 에러 타입입니다.
//! 모든 공개 API는 [`AppResult`]를 반환하며, 에러는 호출자에게 그대로 전파됩니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 변형 | 발생 시점 |
//! |------|------|-----------|
//! | 설정 오류 | [`AppError::ConfigurationError`] | 환경 변수 누락, 전략 생성 |
//! | 입력 검증 | [`AppError::ValidationError`] | `StrategyOptions` 검증 실패 |
//! | 외부 서비스 | [`AppError::ExternalServiceError`] | user-info 요청 실패, 2xx 이외 응답 |
//! | 역직렬화 | [`AppError::DeserializationError`] | user-info 응답 JSON 파싱 실패 |
//! | 인증 | [`AppError::AuthenticationError`] | verify 콜백의 인증 거부 |
//! | 내부 오류 | [`AppError::InternalError`] | 검증된 설정에서 파생한 값이 깨진 경우 등 |
//!
//! 전략은 에러를 삼키지 않으며, 실패 시 부분 프로필이나 기본 프로필로 대체하지 않습니다.
//! 재시도 정책도 두지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use asgardeo_auth_strategy::errors::errors::{AppError, AppResult};
//!
//! async fn login(engine: &Engine, token: TokenResponse<AsgardeoExtraParams>) -> AppResult<User> {
//!     match engine.authenticate(callback_url, token, None).await {
//!         Ok(user) => Ok(user),
//!         Err(AppError::ExternalServiceError(msg)) => {
//!             log::warn!("Asgardeo 연동 실패: {}", msg);
//!             Err(AppError::ExternalServiceError(msg))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use thiserror::Error;

/// 전략 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 설정값 누락 또는 잘못된 설정
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 생성자 입력값 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Asgardeo 엔드포인트 호출 실패 (네트워크 오류, 2xx 이외 응답)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 응답 본문 JSON 파싱 실패
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// verify 콜백이 인증을 거부한 경우
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 검증된 설정에서 파생한 값이 깨지는 등 내부 불변식 위반
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 전략 전역 Result 타입
pub type AppResult<T> = Result<T, AppError>;

/// 임의의 에러에 메시지를 덧붙여 `AppError::InternalError`로 변환
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
