use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 토큰 발급 응답
///
/// OAuth 2.0 토큰 응답 형식을 따릅니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// 토큰 검증 결과
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenVerificationResponse {
    /// 서명, 사용자, 만료 검사를 모두 통과했는지 여부
    pub valid: bool,
    pub username: String,
    pub expires_at: Option<DateTime<Utc>>,
}
