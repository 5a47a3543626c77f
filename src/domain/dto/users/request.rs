use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255, message = "사용자명이 필요합니다"))]
    pub username: String,
    #[validate(length(min = 1, message = "비밀번호가 필요합니다"))]
    pub password: String,
}
