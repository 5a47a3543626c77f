use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user_details::UserDetails;

/// JWT 토큰 검증을 통과한 사용자 정보
///
/// 인증 미들웨어가 Request Extensions에 저장하며,
/// 핸들러에서는 추출자(extractor)로 받아 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자명 (토큰의 `sub` 클레임)
    pub username: String,

    /// 토큰 만료 시각
    pub expires_at: DateTime<Utc>,
}

impl UserDetails for AuthenticatedUser {
    fn username(&self) -> &str {
        &self.username
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
