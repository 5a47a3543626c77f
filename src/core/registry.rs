//! # Service Registry
//!
//! 애플리케이션이 사용하는 서비스 인스턴스를 한곳에 모은 컨테이너입니다.
//! 전역 상태 없이 `main`에서 한 번 조립되어 `web::Data`로 워커에 공유되며,
//! 미들웨어와 핸들러는 `app_data`에서 꺼내 사용합니다.
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::in_memory(token_service, user_details);
//! let registry = web::Data::new(registry);
//!
//! HttpServer::new(move || App::new().app_data(registry.clone()))
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::ResourceCollection;
use crate::errors::AppError;
use crate::repositories::resources::{InMemoryResourceStore, ResourceStore};
use crate::services::auth::TokenService;
use crate::services::users::UserDetailsService;

pub struct ServiceRegistry {
    token_service: Arc<TokenService>,
    user_details: Arc<dyn UserDetailsService>,
    stores: HashMap<ResourceCollection, Arc<dyn ResourceStore>>,
}

impl ServiceRegistry {
    pub fn new(
        token_service: Arc<TokenService>,
        user_details: Arc<dyn UserDetailsService>,
        stores: HashMap<ResourceCollection, Arc<dyn ResourceStore>>,
    ) -> Self {
        Self {
            token_service,
            user_details,
            stores,
        }
    }

    /// 모든 컬렉션에 인메모리 저장소를 연결합니다.
    pub fn in_memory(
        token_service: Arc<TokenService>,
        user_details: Arc<dyn UserDetailsService>,
    ) -> Self {
        let stores = ResourceCollection::ALL
            .into_iter()
            .map(|collection| {
                let store: Arc<dyn ResourceStore> = Arc::new(InMemoryResourceStore::new(collection));
                (collection, store)
            })
            .collect();

        Self::new(token_service, user_details, stores)
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    pub fn user_details(&self) -> &dyn UserDetailsService {
        self.user_details.as_ref()
    }

    /// # Errors
    ///
    /// * `AppError::InternalError` - 컬렉션에 저장소가 연결되지 않음
    pub fn store(&self, collection: ResourceCollection) -> Result<Arc<dyn ResourceStore>, AppError> {
        self.stores.get(&collection).cloned().ok_or_else(|| {
            AppError::InternalError(format!("{} 저장소가 등록되지 않았습니다", collection))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::services::users::InMemoryUserDetailsService;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    fn token_service() -> Arc<TokenService> {
        let config = JwtConfig::new(&STANDARD.encode([7u8; 32]), 1).unwrap();
        Arc::new(TokenService::new(&config))
    }

    #[test]
    fn test_in_memory_registers_every_collection() {
        let registry = ServiceRegistry::in_memory(
            token_service(),
            Arc::new(InMemoryUserDetailsService::new(4).unwrap()),
        );

        for collection in ResourceCollection::ALL {
            assert!(registry.store(collection).is_ok());
        }
        assert_eq!(registry.token_service().expiration_days(), 1);
    }

    #[test]
    fn test_missing_store_is_internal_error() {
        let registry = ServiceRegistry::new(
            token_service(),
            Arc::new(InMemoryUserDetailsService::new(4).unwrap()),
            HashMap::new(),
        );

        assert!(matches!(
            registry.store(ResourceCollection::Moments),
            Err(AppError::InternalError(_))
        ));
    }
}
