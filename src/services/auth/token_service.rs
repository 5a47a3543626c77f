//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256(HS256)으로 서명된 JSON Web Token을 발급하고 검증합니다.
//! 서버 측에 세션이나 토큰 저장소가 없으며, 유효성은 서명 재검증과
//! 만료 시각 비교만으로 판단합니다.
//!
//! 에러 정책:
//!
//! - 서명 불일치, 형식 오류 → `Err(TokenError)` 로 전파
//! - 사용자 불일치, 만료 → `Ok(false)`

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::config::JwtConfig;
use crate::domain::models::auth::UserDetails;
use crate::domain::models::token::Claims;
use crate::errors::TokenError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// JWT 토큰 관리 서비스
///
/// 생성 이후 변경되지 않는 키와 만료 정책만 보관하므로
/// `Arc`로 공유하여 여러 워커에서 동시에 호출해도 안전합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_days: i64,
}

impl TokenService {
    /// 검증된 설정으로 서비스를 생성합니다.
    ///
    /// 키 길이 검사는 [`JwtConfig::new`]에서 이미 끝났으므로 실패하지 않습니다.
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 에러가 아닌 `false`로 처리하기 위해 직접 비교합니다
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret_key()),
            decoding_key: DecodingKey::from_secret(config.secret_key()),
            validation,
            expiration_days: config.expiration_days(),
        }
    }

    /// 설정된 만료 기간 (일)
    pub fn expiration_days(&self) -> i64 {
        self.expiration_days
    }

    /// 새로 발급되는 토큰의 수명 (초)
    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_days.saturating_mul(SECONDS_PER_DAY)
    }

    /// 사용자를 위한 JWT 토큰 생성
    ///
    /// # Errors
    ///
    /// * `TokenError::MissingSubject` - 사용자명이 비어 있음
    /// * `TokenError::Signing` - 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.generate_token(&user)?;
    /// assert_eq!(token_service.extract_username(&token)?, user.username());
    /// ```
    pub fn generate_token<U>(&self, user: &U) -> Result<String, TokenError>
    where
        U: UserDetails + ?Sized,
    {
        self.generate_token_with_claims(Map::new(), user)
    }

    /// 추가 클레임을 포함한 JWT 토큰 생성
    ///
    /// 추가 클레임이 먼저 기록되고 `sub`, `iat`, `exp`가 뒤에 기록되므로
    /// 예약된 이름과 겹치는 추가 클레임은 서비스 값으로 덮어써집니다.
    pub fn generate_token_with_claims<U>(
        &self,
        extra_claims: Map<String, Value>,
        user: &U,
    ) -> Result<String, TokenError>
    where
        U: UserDetails + ?Sized,
    {
        self.build_token(extra_claims, user, Utc::now())
    }

    fn build_token<U>(
        &self,
        mut claims: Map<String, Value>,
        user: &U,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError>
    where
        U: UserDetails + ?Sized,
    {
        let username = user.username();
        if username.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        let expiration = Duration::try_days(self.expiration_days)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                TokenError::Signing(format!(
                    "expiration of {} days is out of range",
                    self.expiration_days
                ))
            })?;

        claims.insert("sub".to_string(), Value::String(username.to_string()));
        claims.insert("iat".to_string(), Value::from(issued_at.timestamp()));
        claims.insert("exp".to_string(), Value::from(expiration.timestamp()));

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// 토큰이 주어진 사용자에게 발급되었고 아직 만료되지 않았는지 확인
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 서명 검증 성공, `sub`가 사용자명과 일치, `exp`가 현재보다 이후
    /// * `Ok(false)` - 사용자 불일치 또는 만료
    ///
    /// # Errors
    ///
    /// * `TokenError::SignatureVerification` - 서명 불일치
    /// * `TokenError::MalformedToken` - 해석할 수 없는 토큰
    pub fn is_token_valid<U>(&self, token: &str, user: &U) -> Result<bool, TokenError>
    where
        U: UserDetails + ?Sized,
    {
        self.is_token_valid_at(token, user, Utc::now())
    }

    /// [`is_token_valid`](Self::is_token_valid)와 같지만 기준 시각을 직접 지정합니다.
    pub fn is_token_valid_at<U>(
        &self,
        token: &str,
        user: &U,
        now: DateTime<Utc>,
    ) -> Result<bool, TokenError>
    where
        U: UserDetails + ?Sized,
    {
        let claims = self.extract_all_claims(token)?;
        Ok(claims.is_valid_for(user.username(), now))
    }

    /// 토큰의 주체(사용자명) 추출
    pub fn extract_username(&self, token: &str) -> Result<String, TokenError> {
        self.extract_claim(token, |claims| claims.subject().to_string())
    }

    /// 토큰의 만료 시각 추출
    pub fn extract_expiration(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        self.extract_claim(token, Claims::expiration)?
            .ok_or_else(|| TokenError::MalformedToken("exp claim is out of range".to_string()))
    }

    /// 서명을 검증한 뒤 클레임 집합에 `resolver`를 적용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let role = token_service.extract_claim(&token, |claims| {
    ///     claims.get("role").and_then(|v| v.as_str()).map(str::to_owned)
    /// })?;
    /// ```
    pub fn extract_claim<T, F>(&self, token: &str, resolver: F) -> Result<T, TokenError>
    where
        F: FnOnce(&Claims) -> T,
    {
        let claims = self.extract_all_claims(token)?;
        Ok(resolver(&claims))
    }

    fn extract_all_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(TokenError::from)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    /// 스킴 이름은 대소문자를 구분하지 않습니다 (RFC 7235).
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, TokenError> {
        const SCHEME: &str = "Bearer ";

        auth_header
            .get(..SCHEME.len())
            .filter(|scheme| scheme.eq_ignore_ascii_case(SCHEME))
            .and_then(|_| auth_header.get(SCHEME.len()..))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(TokenError::InvalidAuthorizationHeader)
    }
}
