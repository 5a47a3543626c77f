//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;

use crate::core::ServiceRegistry;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::Claims;
use crate::errors::{AppError, TokenError};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let registry = match req.app_data::<web::Data<ServiceRegistry>>().cloned() {
                Some(registry) => registry,
                None => {
                    log::error!("ServiceRegistry가 app_data에 등록되지 않았습니다");
                    let response = HttpResponse::InternalServerError().json(serde_json::json!({
                        "error": "internal_error",
                        "message": "인증 서비스를 사용할 수 없습니다"
                    }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            match authenticate_request(&req, &registry).await {
                Ok(user) => {
                    log::debug!("인증 성공: {}", user.username);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    log::debug!("인증 거부: {} {} ({})", req.method(), req.path(), err);
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 토큰 검증 실패를 종류별 로그 레벨로 기록하고 AppError로 변환
fn log_token_error(err: TokenError) -> AppError {
    if err.is_verification_failure() {
        log::warn!("토큰 검증 실패: {}", err);
    } else {
        log::debug!("토큰 거부: {}", err);
    }
    err.into()
}

/// Authorization 헤더의 Bearer 토큰으로 요청 사용자를 확인합니다.
///
/// 토큰은 한 번만 디코딩(서명 검증 포함)하고, 그 클레임으로
/// 계정 조회와 `TokenService::is_token_valid`와 같은 사용자/만료 검사를 수행합니다.
async fn authenticate_request(
    req: &ServiceRequest,
    registry: &ServiceRegistry,
) -> Result<AuthenticatedUser, AppError> {
    let token_service = registry.token_service();

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service
        .extract_claim(token, Claims::clone)
        .map_err(log_token_error)?;
    let username = claims.subject();

    let account = match registry.user_details().load_user_by_username(username).await {
        Ok(account) => account,
        Err(AppError::NotFound(_)) => {
            log::warn!("알 수 없는 사용자의 토큰: {}", username);
            return Err(AppError::AuthenticationError("알 수 없는 사용자입니다".to_string()));
        }
        Err(e) => return Err(e),
    };

    if !account.enabled {
        log::warn!("비활성화된 계정의 토큰: {}", username);
        return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
    }

    if !claims.is_valid_for(&account.username, Utc::now()) {
        log::debug!("만료된 토큰: {}", username);
        return Err(AppError::AuthenticationError("만료된 토큰입니다".to_string()));
    }

    let expires_at = claims
        .expiration()
        .ok_or_else(|| log_token_error(TokenError::MalformedToken("exp claim is out of range".to_string())))?;

    Ok(AuthenticatedUser {
        username: account.username,
        expires_at,
    })
}
