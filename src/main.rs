//! VHub API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! JWT 설정이 올바르지 않으면 서버를 시작하지 않습니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use vhub_api::config::{
    BootstrapUsers, Environment, JwtConfig, PasswordConfig, RateLimitConfig, ServerConfig,
};
use vhub_api::core::ServiceRegistry;
use vhub_api::routes::configure_all_routes;
use vhub_api::services::auth::TokenService;
use vhub_api::services::users::InMemoryUserDetailsService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let (profile, env_file) = load_env_file();
    init_logging();

    match env_file {
        Ok(filename) => info!("[{}] {} 파일 로드 됨", profile, filename),
        Err(e) => warn!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }

    info!("🚀 VHub API 시작중...");

    let registry = build_registry()?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(web::Data::new(registry)).await
}

/// 설정을 읽고 서비스 인스턴스를 조립합니다
///
/// # Errors
///
/// * `io::ErrorKind::InvalidInput` - JWT 설정이 없거나 올바르지 않음
fn build_registry() -> io::Result<ServiceRegistry> {
    let jwt_config = JwtConfig::from_env().map_err(|e| {
        error!("JWT 설정 오류: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("🔑 JWT 설정 로드됨: 만료 {}일", jwt_config.expiration_days());

    let token_service = Arc::new(TokenService::new(&jwt_config));
    let user_details = InMemoryUserDetailsService::new(PasswordConfig::bcrypt_cost()).map_err(|e| {
        error!("사용자 서비스 초기화 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let user_details = Arc::new(user_details);

    let bootstrap = BootstrapUsers::from_env();
    for (username, password) in &bootstrap.users {
        match user_details.create_user(username, password) {
            Ok(_) => info!("👤 초기 사용자 등록: {}", username),
            Err(e) => warn!("초기 사용자 등록 실패 ({}): {}", username, e),
        }
    }
    if bootstrap.users.is_empty() {
        warn!("BOOTSTRAP_USERS가 비어 있습니다. 로그인 가능한 사용자가 없습니다");
    }

    Ok(ServiceRegistry::in_memory(token_service, user_details))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: web::Data<ServiceRegistry>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND와 RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(registry.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과를 반환하여 초기화 후에 기록합니다.
fn load_env_file() -> (String, Result<&'static str, dotenv::Error>) {
    let profile = Environment::profile();

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    (profile, result)
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=vhub_api::middlewares=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
