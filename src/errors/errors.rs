//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 에러는 두 계층으로 나뉩니다.
//!
//! - [`TokenError`] - 토큰 발급/검증 과정에서 발생하는 에러 (HTTP와 무관)
//! - [`AppError`] - HTTP 응답으로 변환되는 애플리케이션 에러
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, TokenError};
//!
//! fn current_username(service: &TokenService, token: &str) -> Result<String, AppError> {
//!     // TokenError는 `?`를 통해 AppError로 자동 변환됩니다
//!     let username = service.extract_username(token)?;
//!     Ok(username)
//! }
//! ```

use thiserror::Error;

/// JWT 토큰 관련 에러
///
/// 서명 검증 실패와 형식 오류는 에러로 전파되며,
/// 토큰 만료는 에러가 아닌 `Ok(false)` 결과로 표현됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 비밀키 누락, 잘못된 base64, 256비트 미만의 키, 음수 만료 기간
    #[error("Invalid JWT configuration: {0}")]
    Configuration(String),

    /// 토큰 서명(인코딩) 실패
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// 현재 비밀키로 서명이 검증되지 않음 (변조, 다른 키, 손상)
    #[error("Token signature verification failed")]
    SignatureVerification,

    /// 세 부분으로 구성된 compact 형식으로 해석할 수 없는 토큰
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// 사용자명이 비어 있는 사용자에게는 토큰을 발급할 수 없음
    #[error("Identity has no username")]
    MissingSubject,

    /// `Bearer <token>` 형식이 아닌 Authorization 헤더
    #[error("Invalid authorization header format")]
    InvalidAuthorizationHeader,
}

impl TokenError {
    /// 위조/손상된 입력으로 인한 검증 실패인지 확인
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            TokenError::SignatureVerification | TokenError::MalformedToken(_)
        )
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::SignatureVerification
            }
            _ => TokenError::MalformedToken(e.to_string()),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Configuration(_) | TokenError::Signing(_) => {
                AppError::InternalError(e.to_string())
            }
            _ => AppError::AuthenticationError(e.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
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
