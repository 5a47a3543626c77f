//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 싱글톤이 아니라 시작 시점에 명시적으로 생성되어
//! [`crate::core::ServiceRegistry`]를 통해 핸들러와 미들웨어에 전달됩니다.
//!
//! - [`auth`] - JWT 토큰 발급/검증
//! - [`users`] - 사용자 조회 및 비밀번호 인증

pub mod users;
pub mod auth;
