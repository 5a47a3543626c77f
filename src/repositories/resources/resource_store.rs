//! 리소스 저장소 계약
//!
//! 각 컬렉션은 페이지 조회, 단건 조회, 생성, 수정, 삭제만 제공합니다.
//! 컬렉션별 쿼리 로직은 없습니다.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::entities::Resource;
use crate::errors::AppError;

use super::page::{Page, PageRequest};

#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// 정렬/페이지 조건에 맞는 리소스 목록
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Resource>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, AppError>;

    /// 새 식별자를 부여하여 저장합니다. 본문의 `id` 속성은 무시됩니다.
    async fn save(&self, attributes: Map<String, Value>) -> Result<Resource, AppError>;

    /// 속성 전체를 교체합니다. 존재하지 않으면 `None`.
    async fn update(&self, id: i64, attributes: Map<String, Value>) -> Result<Option<Resource>, AppError>;

    /// 삭제 여부를 반환합니다.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}
