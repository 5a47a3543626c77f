//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, 패스워드 해싱, 요청 속도 제한 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// `PROFILE`이 설정되지 않았을 때의 프로필
    pub const DEFAULT_PROFILE: &'static str = "dev";

    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT`, 없으면 `PROFILE`을 확인하며,
    /// 둘 다 없으면 [`Environment::DEFAULT_PROFILE`] (개발 환경)을 사용합니다.
    /// `.env` 파일 선택과 같은 기본값입니다.
    pub fn current() -> Self {
        Self::resolve(env::var("ENVIRONMENT").ok(), env::var("PROFILE").ok())
    }

    /// `.env` 파일 선택에 사용하는 프로필 이름 (`PROFILE`)
    pub fn profile() -> String {
        env::var("PROFILE").unwrap_or_else(|_| Self::DEFAULT_PROFILE.to_string())
    }

    fn resolve(environment: Option<String>, profile: Option<String>) -> Self {
        let name = environment
            .or(profile)
            .unwrap_or_else(|| Self::DEFAULT_PROFILE.to_string());
        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "0.0.0.0" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4 (`SERVER_WORKERS`)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        )
    }

    fn from_vars(per_second: Option<String>, burst_size: Option<String>) -> Self {
        let per_second = per_second
            .map(|raw| {
                raw.parse::<u64>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                    100
                })
            })
            .unwrap_or(100);

        let burst_size = burst_size
            .map(|raw| {
                raw.parse::<u32>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                    200
                })
            })
            .unwrap_or(200);

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("prod"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_unset_environment_matches_default_profile() {
        let unset = Environment::resolve(None, None);

        assert_eq!(unset, Environment::from_str(Environment::DEFAULT_PROFILE));
        assert_eq!(unset, Environment::Development);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&unset), 4);
    }

    #[test]
    fn test_environment_takes_precedence_over_profile() {
        assert_eq!(
            Environment::resolve(None, Some("prod".to_string())),
            Environment::Production
        );
        assert_eq!(
            Environment::resolve(Some("staging".to_string()), Some("dev".to_string())),
            Environment::Staging
        );
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_rate_limit_config_from_vars() {
        let defaults = RateLimitConfig::from_vars(None, None);
        assert_eq!(defaults, RateLimitConfig { per_second: 100, burst_size: 200 });

        let custom = RateLimitConfig::from_vars(Some("20".to_string()), Some("40".to_string()));
        assert_eq!(custom, RateLimitConfig { per_second: 20, burst_size: 40 });

        let invalid = RateLimitConfig::from_vars(Some("fast".to_string()), Some("-1".to_string()));
        assert_eq!(invalid, RateLimitConfig { per_second: 100, burst_size: 200 });
    }
}
