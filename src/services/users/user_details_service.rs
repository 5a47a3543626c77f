//! # 사용자 조회 및 인증 서비스
//!
//! JWT 필터와 로그인 핸들러가 사용하는 신원(identity) 제공자입니다.
//!
//! - [`UserDetailsService`] - 사용자명으로 계정을 조회하는 계약
//! - [`InMemoryUserDetailsService`] - bcrypt 해시를 보관하는 인메모리 구현
//!
//! 인증 실패 시에는 사용자 존재 여부, 비밀번호 불일치, 비활성 계정을
//! 구분하지 않고 같은 메시지를 반환합니다. 존재하지 않는 사용자도
//! 더미 해시로 bcrypt 검증을 거치므로 응답 시간으로 구분되지 않습니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::UserAccount;
use crate::errors::{AppError, ErrorContext};

const BAD_CREDENTIALS: &str = "잘못된 사용자명 또는 비밀번호입니다";

const DUMMY_PASSWORD: &str = "unknown-user-placeholder";

/// 사용자명으로 계정을 조회하는 신원 제공자
#[async_trait]
pub trait UserDetailsService: Send + Sync {
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 사용자명의 계정이 없음
    async fn load_user_by_username(&self, username: &str) -> Result<UserAccount, AppError>;

    /// 존재하지 않는 사용자 로그인 시 검증에 사용할 bcrypt 해시
    ///
    /// 실제 계정과 같은 cost로 생성되어야 합니다.
    fn dummy_password_hash(&self) -> &str;

    /// 사용자명과 비밀번호로 계정을 인증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 계정 없음, 비밀번호 불일치, 비활성 계정
    /// * `AppError::InternalError` - 저장된 해시를 검증할 수 없음
    async fn authenticate(&self, username: &str, password: &str) -> Result<UserAccount, AppError> {
        let account = match self.load_user_by_username(username).await {
            Ok(account) => account,
            Err(AppError::NotFound(_)) => {
                // 결과와 무관하게 실제 계정과 같은 비용을 소모
                let _ = bcrypt::verify(password, self.dummy_password_hash());
                log::debug!("존재하지 않는 사용자 로그인 시도: {}", username);
                return Err(AppError::AuthenticationError(BAD_CREDENTIALS.to_string()));
            }
            Err(e) => return Err(e),
        };

        let is_valid = bcrypt::verify(password, &account.password_hash)
            .context("비밀번호 검증 실패")?;

        if !is_valid {
            log::debug!("비밀번호 불일치: {}", username);
            return Err(AppError::AuthenticationError(BAD_CREDENTIALS.to_string()));
        }

        if !account.enabled {
            log::debug!("비활성화된 계정 로그인 시도: {}", username);
            return Err(AppError::AuthenticationError(BAD_CREDENTIALS.to_string()));
        }

        Ok(account)
    }
}

/// 인메모리 사용자 저장소
pub struct InMemoryUserDetailsService {
    users: RwLock<HashMap<String, UserAccount>>,
    bcrypt_cost: u32,
    dummy_hash: String,
}

impl InMemoryUserDetailsService {
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt가 지원하지 않는 cost
    pub fn new(bcrypt_cost: u32) -> Result<Self, AppError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, bcrypt_cost)
            .context("더미 비밀번호 해싱 실패")?;

        Ok(Self {
            users: RwLock::new(HashMap::new()),
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// 새 계정을 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 사용자명 또는 비밀번호
    /// * `AppError::ConflictError` - 이미 등록된 사용자명
    pub fn create_user(&self, username: &str, password: &str) -> Result<UserAccount, AppError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::ValidationError(
                "사용자명과 비밀번호는 비어 있을 수 없습니다".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        let account = UserAccount::new(username.to_string(), password_hash);

        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;
        if users.contains_key(username) {
            return Err(AppError::ConflictError(format!(
                "이미 존재하는 사용자입니다: {}",
                username
            )));
        }
        users.insert(username.to_string(), account.clone());

        log::info!("사용자 등록: {}", username);
        Ok(account)
    }

    /// 계정 활성화 상태를 변경합니다.
    pub fn set_enabled(&self, username: &str, enabled: bool) -> Result<(), AppError> {
        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;
        let account = users
            .get_mut(username)
            .ok_or_else(|| AppError::NotFound(format!("사용자: {}", username)))?;
        account.enabled = enabled;
        Ok(())
    }
}

#[async_trait]
impl UserDetailsService for InMemoryUserDetailsService {
    async fn load_user_by_username(&self, username: &str) -> Result<UserAccount, AppError> {
        let users = self.users.read().context("사용자 저장소 잠금 실패")?;
        users
            .get(username)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("사용자: {}", username)))
    }

    fn dummy_password_hash(&self) -> &str {
        &self.dummy_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::UserDetails;

    // 테스트에서는 최소 cost 사용
    const TEST_COST: u32 = 4;

    #[actix_web::test]
    async fn test_create_and_load_user() {
        let service = InMemoryUserDetailsService::new(TEST_COST).unwrap();
        service.create_user("+15551234567", "s3cret").unwrap();

        let account = service.load_user_by_username("+15551234567").await.unwrap();

        assert_eq!(account.username(), "+15551234567");
        assert_ne!(account.password_hash, "s3cret");
        assert!(account.enabled);
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_found() {
        let service = InMemoryUserDetailsService::new(TEST_COST).unwrap();

        let result = service.load_user_by_username("ghost").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_and_empty_users_are_rejected() {
        let service = InMemoryUserDetailsService::new(TEST_COST).unwrap();
        service.create_user("alice", "pw").unwrap();

        assert!(matches!(service.create_user("alice", "other"), Err(AppError::ConflictError(_))));
        assert!(matches!(service.create_user("", "pw"), Err(AppError::ValidationError(_))));
        assert!(matches!(service.create_user("bob", ""), Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_authenticate() {
        let service = InMemoryUserDetailsService::new(TEST_COST).unwrap();
        service.create_user("alice", "correct horse").unwrap();

        let account = service.authenticate("alice", "correct horse").await.unwrap();
        assert_eq!(account.username, "alice");

        assert!(matches!(
            service.authenticate("alice", "wrong").await,
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.authenticate("ghost", "correct horse").await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_dummy_hash_uses_configured_cost() {
        let service = InMemoryUserDetailsService::new(TEST_COST).unwrap();
        let hash = service.dummy_password_hash();

        assert!(hash.starts_with("$2b$04$"));
        assert!(!bcrypt::verify("anything", hash).unwrap());
        assert!(matches!(
            InMemoryUserDetailsService::new(2),
            Err(AppError::InternalError(_))
        ));
    }

    #[actix_web::test]
    async fn test_unknown_user_still_runs_password_check() {
        let service = InMemoryUserDetailsService::new(TEST_COST).unwrap();

        let err = service.authenticate("ghost", DUMMY_PASSWORD).await.unwrap_err();

        assert!(matches!(err, AppError::AuthenticationError(ref msg) if msg == BAD_CREDENTIALS));
    }

    #[actix_web::test]
    async fn test_disabled_account_cannot_authenticate() {
        let service = InMemoryUserDetailsService::new(TEST_COST).unwrap();
        service.create_user("alice", "pw").unwrap();
        service.set_enabled("alice", false).unwrap();

        assert!(matches!(
            service.authenticate("alice", "pw").await,
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(service.set_enabled("ghost", true), Err(AppError::NotFound(_))));
    }
}
