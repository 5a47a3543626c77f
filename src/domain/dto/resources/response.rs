use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::domain::entities::{Resource, ResourceCollection};
use crate::repositories::resources::Page;

/// 페이지 메타데이터 (`page` 블록)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

/// 컬렉션 리소스 응답
///
/// ```json
/// { "_embedded": { "stories": [ ... ] }, "page": { "size": 20, "totalElements": 1, "totalPages": 1, "number": 0 } }
/// ```
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    #[serde(rename = "_embedded")]
    pub embedded: Map<String, Value>,
    pub page: PageMetadata,
}

impl CollectionResponse {
    pub fn new(collection: ResourceCollection, page: Page<Resource>) -> Self {
        let mut embedded = Map::new();
        embedded.insert(collection.rel().to_string(), json!(page.content));

        Self {
            embedded,
            page: PageMetadata {
                size: page.size,
                total_elements: page.total_elements,
                total_pages: page.total_pages,
                number: page.number,
            },
        }
    }
}
