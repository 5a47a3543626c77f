//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수(및 `.env` 파일) 기반의 설정값을 시작 시점에 읽어
//! 불변 구조체로 만들고, 필요한 서비스에 생성자로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, 패스워드 해싱, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명 키/만료 정책, 초기 사용자 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정 (필수)
//! export JWT_SECRET_KEY="base64-encoded-256-bit-key"
//! export JWT_EXPIRATION="1"        # 일 단위
//!
//! # 선택
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export BOOTSTRAP_USERS="alice:pw"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
