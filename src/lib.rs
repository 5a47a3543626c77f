//! VHub API 백엔드
//!
//! 스토리, vly, 모먼트, revly 컬렉션을 JWT 인증 뒤에서 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **JWT 인증**: HS256 서명, 일 단위 만료의 상태 없는 액세스 토큰
//! - **신원 제공자**: 사용자명 조회와 bcrypt 비밀번호 검증
//! - **컬렉션 CRUD**: 페이지/정렬 조회를 지원하는 범용 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← Bearer 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 발급/검증, 사용자 인증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 컬렉션 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use vhub_api::config::JwtConfig;
//! use vhub_api::services::auth::TokenService;
//!
//! let token_service = TokenService::new(&JwtConfig::from_env()?);
//!
//! let token = token_service.generate_token(&account)?;
//! assert!(token_service.is_token_valid(&token, &account)?);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
