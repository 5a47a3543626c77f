//! Authentication HTTP Handlers
//!
//! 로그인, 토큰 검증, 현재 사용자 조회 엔드포인트입니다.
//!
//! - `POST /auth/login` - 사용자명/비밀번호로 액세스 토큰 발급
//! - `POST /auth/verify` - 토큰 유효성 확인
//! - `GET /auth/me` - 현재 인증된 사용자 (인증 필요)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::ServiceRegistry;
use crate::domain::{AuthenticatedUser, LoginRequest, TokenResponse, TokenVerificationResponse, VerifyTokenRequest};
use crate::errors::AppError;

/// 로컬 로그인 핸들러
///
/// 자격 증명이 올바르면 `Bearer` 액세스 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account = registry
        .user_details()
        .authenticate(&payload.username, &payload.password)
        .await?;

    let token_service = registry.token_service();
    let access_token = token_service.generate_token(&account).map_err(|e| {
        log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", account.username, e);
        AppError::from(e)
    })?;

    log::info!("로그인 성공: {}", account.username);

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(
        access_token,
        token_service.expires_in_seconds(),
    )))
}

/// 토큰 검증 핸들러
///
/// 서명이 올바른 토큰에 대해 사용자 일치와 만료 여부를 `valid`로 알려줍니다.
/// 위조되었거나 형식이 잘못된 토큰은 401로 응답합니다.
///
/// # Endpoint
/// `POST /auth/verify`
#[post("/verify")]
pub async fn verify_token(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<VerifyTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_service = registry.token_service();
    let token = payload.token.trim();

    let username = token_service.extract_username(token)?;
    let expires_at = token_service.extract_expiration(token)?;

    let valid = match registry.user_details().load_user_by_username(&username).await {
        Ok(account) => account.enabled && token_service.is_token_valid(token, &account)?,
        Err(AppError::NotFound(_)) => false,
        Err(e) => return Err(e),
    };

    log::debug!("토큰 검증: 사용자 {}, 유효 {}", username, valid);

    Ok(HttpResponse::Ok().json(TokenVerificationResponse {
        valid,
        username,
        expires_at: Some(expires_at),
    }))
}

/// 현재 인증된 사용자 정보 조회 엔드포인트
///
/// # Endpoint
/// `GET /auth/me`
#[get("")]
pub async fn get_current_user(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user)
}
