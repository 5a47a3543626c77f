//! 인증 주체(principal) 추상화

/// 인증된 사용자를 표현하는 최소 계약
///
/// 토큰 발급 시에는 토큰의 `sub` 클레임으로,
/// 토큰 검증 시에는 기대하는 사용자로 사용됩니다.
pub trait UserDetails {
    /// 정규화된 사용자명 (예: 전화번호, 로그인 아이디)
    fn username(&self) -> &str;
}

impl<T: UserDetails + ?Sized> UserDetails for &T {
    fn username(&self) -> &str {
        (**self).username()
    }
}
