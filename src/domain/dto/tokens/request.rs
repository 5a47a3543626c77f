use serde::Deserialize;
use validator::Validate;

/// 토큰 검증 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyTokenRequest {
    #[validate(length(min = 1, message = "토큰이 비어 있습니다"))]
    pub token: String,
}
