//! # Core Module
//!
//! 서비스 인스턴스를 조립하고 공유하는 [`registry`]를 제공합니다.
//!
//! 서비스는 전역 싱글톤이 아니라 시작 시 명시적으로 생성되어
//! [`ServiceRegistry`]에 담긴 뒤 `web::Data`로 전달됩니다.

pub mod registry;

pub use registry::*;
