//! 인증 주체 모델

pub mod authenticated_user;
pub mod user_details;

pub use authenticated_user::*;
pub use user_details::*;
