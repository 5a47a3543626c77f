//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 발급과 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명 (256비트 이상의 키)
//! - 일 단위 만료 정책
//! - 서버 측 세션 없음 (만료가 유일한 비활성화 수단)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(&JwtConfig::from_env()?);
//! let token = token_service.generate_token(&user)?;
//! let valid = token_service.is_token_valid(&token, &user)?;
//! ```

pub mod token_service;

pub use token_service::*;
