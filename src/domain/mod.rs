//! 도메인 계층 모듈
//!
//! - [`entities`] - 사용자 계정, 리소스 컬렉션
//! - [`models`] - 인증 주체와 JWT 클레임
//! - [`dto`] - HTTP 요청/응답 구조체

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
