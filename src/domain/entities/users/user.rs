//! 사용자 계정 엔티티
//!
//! 인메모리 사용자 저장소가 보관하는 계정 정보입니다.

use serde::Serialize;

use crate::domain::models::auth::UserDetails;

/// 사용자 계정
///
/// 비밀번호는 bcrypt 해시로만 보관하며 직렬화 대상에서 제외합니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserAccount {
    /// 사용자명 (토큰의 `sub` 클레임으로 사용)
    pub username: String,
    /// bcrypt 해시된 비밀번호
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 계정 활성화 여부
    pub enabled: bool,
}

impl UserAccount {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
            enabled: true,
        }
    }
}

impl UserDetails for UserAccount {
    fn username(&self) -> &str {
        &self.username
    }
}
