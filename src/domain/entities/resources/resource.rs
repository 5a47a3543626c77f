//! REST 컬렉션으로 노출되는 도메인 리소스
//!
//! 스토리, vly, 모먼트, revly 네 가지 컬렉션을 제공합니다.
//! 리소스 본문은 스키마 없는 JSON 문서이며, 식별자만 저장소가 부여합니다.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 리소스 컬렉션 종류
///
/// 경로 세그먼트가 곧 컬렉션 관계 이름(`_embedded` 키)입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCollection {
    Stories,
    Vlyes,
    Moments,
    Revlyes,
}

impl ResourceCollection {
    pub const ALL: [ResourceCollection; 4] = [
        ResourceCollection::Stories,
        ResourceCollection::Vlyes,
        ResourceCollection::Moments,
        ResourceCollection::Revlyes,
    ];

    /// URL 경로 세그먼트 (`/api/v1/{path}`)
    pub fn path(&self) -> &'static str {
        match self {
            ResourceCollection::Stories => "stories",
            ResourceCollection::Vlyes => "vlyes",
            ResourceCollection::Moments => "moments",
            ResourceCollection::Revlyes => "revlyes",
        }
    }

    /// 컬렉션 관계 이름
    pub fn rel(&self) -> &'static str {
        self.path()
    }
}

impl fmt::Display for ResourceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// 저장된 리소스 (식별자 + 속성)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_paths() {
        assert_eq!(ResourceCollection::Stories.path(), "stories");
        assert_eq!(ResourceCollection::Revlyes.to_string(), "revlyes");
        assert_eq!(ResourceCollection::ALL.map(|c| c.rel()), ["stories", "vlyes", "moments", "revlyes"]);
    }

    #[test]
    fn test_resource_serializes_flat() {
        let mut attributes = Map::new();
        attributes.insert("title".to_string(), json!("Sunrise"));
        let resource = Resource { id: 7, attributes };

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({ "id": 7, "title": "Sunrise" })
        );
    }
}
