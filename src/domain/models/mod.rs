//! 도메인 모델 모듈
//!
//! - [`auth`] - 인증 주체 (`UserDetails`, `AuthenticatedUser`)
//! - [`token`] - JWT 클레임 구조체

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
