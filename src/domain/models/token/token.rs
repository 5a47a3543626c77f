//! JWT 클레임 구조체
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)과 발급 시 추가된 임의의 클레임을 함께 담습니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 디코딩 및 서명 검증이 끝난 토큰의 클레임 집합
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자명)
/// - `iat`: 토큰 발급 시간 (NumericDate, 초)
/// - `exp`: 토큰 만료 시간 (NumericDate, 초)
/// - 그 외: 발급 시 전달된 추가 클레임
///
/// NumericDate는 소수일 수 있으므로 `f64`로 읽습니다.
/// 이 서비스가 발급하는 토큰은 항상 정수 초를 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<f64>,
    pub exp: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(from_numeric_date)
    }

    /// 표현 가능한 범위를 벗어난 `exp`는 `None`
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        from_numeric_date(self.exp)
    }

    /// `sub`가 `username`과 같고 `now` 시점에 아직 만료되지 않았는지 (`exp > now`)
    pub fn is_valid_for(&self, username: &str, now: DateTime<Utc>) -> bool {
        self.sub == username && self.exp > to_numeric_date(now)
    }

    /// 추가 클레임 조회
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

fn from_numeric_date(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }

    let secs = value.floor();
    if secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
        return None;
    }

    let nanos = ((value - secs) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos)
}

fn to_numeric_date(at: DateTime<Utc>) -> f64 {
    at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1e9
}
