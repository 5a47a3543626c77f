//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 키, 만료 정책, 초기 사용자 계정 등 인증 관련 설정을 관리합니다.
//! 설정값은 시작 시점에 한 번 읽혀 불변 구조체로 만들어지며,
//! 이후에는 생성자를 통해 명시적으로 전달됩니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! # base64로 인코딩된 256비트 이상의 HMAC-SHA256 키
//! export JWT_SECRET_KEY="$(openssl rand -base64 32)"
//! # 토큰 만료 기간 (일 단위, 기본값 1)
//! export JWT_EXPIRATION="1"
//! ```
//!
//! ### 초기 사용자 (선택)
//! ```bash
//! export BOOTSTRAP_USERS="+15551234567:s3cret,admin:changeme"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//! use crate::services::auth::TokenService;
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let token_service = TokenService::new(&jwt_config);
//! ```

use std::env;
use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Duration, Utc};

use crate::errors::TokenError;

/// JWT 서명 및 만료 설정
///
/// 유효한 값으로만 생성될 수 있도록 필드를 공개하지 않습니다.
/// [`JwtConfig::new`]가 성공했다면 비밀키는 HMAC-SHA256에 충분한 길이입니다.
#[derive(Clone)]
pub struct JwtConfig {
    secret_key: Vec<u8>,
    expiration_days: i64,
}

impl JwtConfig {
    /// HMAC-SHA256 키의 최소 길이 (256비트)
    pub const MIN_SECRET_KEY_BYTES: usize = 32;

    /// `JWT_EXPIRATION`이 설정되지 않았을 때의 만료 기간 (일)
    pub const DEFAULT_EXPIRATION_DAYS: i64 = 1;

    /// base64로 인코딩된 비밀키와 만료 기간(일)으로 설정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Configuration` - 비어 있거나 디코딩할 수 없는 키,
    ///   32바이트 미만의 키, 음수 만료 기간, 날짜로 표현할 수 없는 만료 기간
    pub fn new(secret_key_base64: &str, expiration_days: i64) -> Result<Self, TokenError> {
        let encoded = secret_key_base64.trim();
        if encoded.is_empty() {
            return Err(TokenError::Configuration(
                "secret key is empty".to_string(),
            ));
        }

        let secret_key = STANDARD.decode(encoded).map_err(|e| {
            TokenError::Configuration(format!("secret key is not valid base64: {}", e))
        })?;

        if secret_key.len() < Self::MIN_SECRET_KEY_BYTES {
            return Err(TokenError::Configuration(format!(
                "secret key is {} bits, HS256 requires at least {} bits",
                secret_key.len() * 8,
                Self::MIN_SECRET_KEY_BYTES * 8
            )));
        }

        if expiration_days < 0 {
            return Err(TokenError::Configuration(format!(
                "expiration must not be negative (got {} days)",
                expiration_days
            )));
        }

        let representable = Duration::try_days(expiration_days)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .is_some();
        if !representable {
            return Err(TokenError::Configuration(format!(
                "expiration of {} days is out of range",
                expiration_days
            )));
        }

        Ok(Self {
            secret_key,
            expiration_days,
        })
    }

    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// * `JWT_SECRET_KEY` - 필수, base64 인코딩된 비밀키
    /// * `JWT_EXPIRATION` - 선택, 만료 기간 (일 단위, 기본값 1)
    ///
    /// 밀리초가 아닌 **일** 단위입니다.
    pub fn from_env() -> Result<Self, TokenError> {
        Self::from_vars(env::var("JWT_SECRET_KEY").ok(), env::var("JWT_EXPIRATION").ok())
    }

    fn from_vars(secret: Option<String>, expiration: Option<String>) -> Result<Self, TokenError> {
        let secret = secret.ok_or_else(|| {
            TokenError::Configuration("JWT_SECRET_KEY must be set".to_string())
        })?;

        let expiration_days = match expiration {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                TokenError::Configuration(format!("JWT_EXPIRATION '{}' is not an integer: {}", raw, e))
            })?,
            None => Self::DEFAULT_EXPIRATION_DAYS,
        };

        Self::new(&secret, expiration_days)
    }

    /// 디코딩된 비밀키 바이트
    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    /// 토큰 만료 기간 (일)
    pub fn expiration_days(&self) -> i64 {
        self.expiration_days
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"[REDACTED]")
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

/// 시작 시 인메모리 사용자 저장소에 등록할 계정 목록
///
/// `BOOTSTRAP_USERS="user:password,user2:password2"` 형식입니다.
/// 사용자명에는 `:`를 사용할 수 없고, 비밀번호에는 사용할 수 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapUsers {
    pub users: Vec<(String, String)>,
}

impl BootstrapUsers {
    pub fn from_env() -> Self {
        env::var("BOOTSTRAP_USERS")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    /// 잘못된 항목은 경고를 남기고 건너뜁니다.
    pub fn parse(raw: &str) -> Self {
        let users = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| match entry.split_once(':') {
                Some((username, password)) if !username.is_empty() && !password.is_empty() => {
                    Some((username.to_string(), password.to_string()))
                }
                _ => {
                    log::warn!("BOOTSTRAP_USERS 항목 무시: '{}' (user:password 형식이 아님)", entry);
                    None
                }
            })
            .collect();

        Self { users }
    }
}
