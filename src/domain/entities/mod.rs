//! 도메인 엔티티 모듈
//!
//! - `users` - 사용자 계정
//! - `resources` - REST 컬렉션 리소스

mod users;
mod resources;

pub use users::*;
pub use resources::*;
