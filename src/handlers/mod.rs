//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data<ServiceRegistry>`에서 서비스를 꺼내 사용하고,
//! 실패는 `AppError`로 반환하여 HTTP 응답으로 변환합니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 인증 관련 엔드포인트
//!   - 로그인 (`POST /auth/login`)
//!   - 토큰 검증 (`POST /auth/verify`)
//!   - 현재 사용자 (`GET /auth/me`)
//!
//! - **`resources`**: 컬렉션별 CRUD 엔드포인트
//!   - 목록 (`GET /{collection}`)
//!   - 생성 (`POST /{collection}`)
//!   - 조회/수정/삭제 (`GET|PUT|DELETE /{collection}/{id}`)
//!
//! ```rust,ignore
//! #[post("/login")]
//! pub async fn login(
//!     registry: web::Data<ServiceRegistry>,
//!     payload: web::Json<LoginRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let account = registry.user_details().authenticate(..).await?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod resources;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::web;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    use crate::config::JwtConfig;
    use crate::core::ServiceRegistry;
    use crate::services::auth::TokenService;
    use crate::services::users::InMemoryUserDetailsService;

    pub fn test_registry(expiration_days: i64) -> web::Data<ServiceRegistry> {
        let config = JwtConfig::new(&STANDARD.encode([9u8; 48]), expiration_days).unwrap();
        let users = InMemoryUserDetailsService::new(4).unwrap();
        users.create_user("alice", "wonderland").unwrap();

        web::Data::new(ServiceRegistry::in_memory(
            Arc::new(TokenService::new(&config)),
            Arc::new(users),
        ))
    }

    pub async fn login_token(registry: &ServiceRegistry, username: &str) -> String {
        let account = registry.user_details().load_user_by_username(username).await.unwrap();
        registry.token_service().generate_token(&account).unwrap()
    }
}
