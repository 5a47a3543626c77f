//! 요청/응답 DTO 모듈
//!
//! HTTP 계층에서 주고받는 데이터 구조를 정의합니다.
//! 요청 DTO는 `validator`로 입력값을 검증합니다.

mod tokens;
mod users;
mod resources;

pub use tokens::*;
pub use users::*;
pub use resources::*;
