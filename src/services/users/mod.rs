//! 사용자 조회 및 인증 서비스 모듈
//!
//! 인증 필터와 로그인 핸들러에 사용자 계정을 제공하는 신원 제공자입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{InMemoryUserDetailsService, UserDetailsService};
//!
//! let users = InMemoryUserDetailsService::new(PasswordConfig::bcrypt_cost())?;
//! users.create_user("+15551234567", "s3cret")?;
//! let account = users.authenticate("+15551234567", "s3cret").await?;
//! ```

pub mod user_details_service;

pub use user_details_service::*;
