//! 인메모리 리소스 저장소

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::entities::{Resource, ResourceCollection};
use crate::errors::{AppError, ErrorContext};

use super::page::{Page, PageRequest, Sort, SortDirection};
use super::resource_store::ResourceStore;

/// `BTreeMap`에 문서를 보관하는 저장소
///
/// 식별자는 1부터 순차적으로 부여되며 삭제된 식별자는 재사용하지 않습니다.
pub struct InMemoryResourceStore {
    collection: ResourceCollection,
    documents: RwLock<BTreeMap<i64, Map<String, Value>>>,
    sequence: AtomicI64,
}

impl InMemoryResourceStore {
    pub fn new(collection: ResourceCollection) -> Self {
        Self {
            collection,
            documents: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(1),
        }
    }
}

fn strip_id(mut attributes: Map<String, Value>) -> Map<String, Value> {
    attributes.remove("id");
    attributes
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// null < bool < number < string, 배열/객체는 타입 순서로만 비교
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn sort_property(id: i64, attributes: &Map<String, Value>, property: &str) -> Option<Value> {
    if property == "id" {
        Some(Value::from(id))
    } else {
        attributes.get(property).cloned()
    }
}

fn compare_entries(
    (a_id, a): (&i64, &Map<String, Value>),
    (b_id, b): (&i64, &Map<String, Value>),
    sort: &Sort,
) -> Ordering {
    let a_value = sort_property(*a_id, a, &sort.property).unwrap_or(Value::Null);
    let b_value = sort_property(*b_id, b, &sort.property).unwrap_or(Value::Null);

    let ordering = compare_values(&a_value, &b_value);
    let ordering = match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };

    ordering.then_with(|| a_id.cmp(b_id))
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Resource>, AppError> {
        let documents = self.documents.read().with_context(|| format!("{} 저장소 잠금 실패", self.collection))?;

        let mut entries: Vec<(&i64, &Map<String, Value>)> = documents.iter().collect();
        if let Some(sort) = &request.sort {
            entries.sort_by(|a, b| compare_entries(*a, *b, sort));
        }

        let total_elements = entries.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);

        let content = entries
            .into_iter()
            .skip(offset)
            .take(size)
            .map(|(id, attributes)| Resource {
                id: *id,
                attributes: attributes.clone(),
            })
            .collect();

        Ok(Page::new(content, request, total_elements))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, AppError> {
        let documents = self.documents.read().with_context(|| format!("{} 저장소 잠금 실패", self.collection))?;
        Ok(documents.get(&id).map(|attributes| Resource {
            id,
            attributes: attributes.clone(),
        }))
    }

    async fn save(&self, attributes: Map<String, Value>) -> Result<Resource, AppError> {
        let attributes = strip_id(attributes);
        let id = self.sequence.fetch_add(1, AtomicOrdering::SeqCst);

        let mut documents = self.documents.write().with_context(|| format!("{} 저장소 잠금 실패", self.collection))?;
        documents.insert(id, attributes.clone());

        log::debug!("{} 생성: id={}", self.collection, id);
        Ok(Resource { id, attributes })
    }

    async fn update(&self, id: i64, attributes: Map<String, Value>) -> Result<Option<Resource>, AppError> {
        let attributes = strip_id(attributes);

        let mut documents = self.documents.write().with_context(|| format!("{} 저장소 잠금 실패", self.collection))?;
        match documents.get_mut(&id) {
            Some(existing) => {
                *existing = attributes.clone();
                log::debug!("{} 수정: id={}", self.collection, id);
                Ok(Some(Resource { id, attributes }))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut documents = self.documents.write().with_context(|| format!("{} 저장소 잠금 실패", self.collection))?;
        let removed = documents.remove(&id).is_some();
        if removed {
            log::debug!("{} 삭제: id={}", self.collection, id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    async fn seeded_store() -> InMemoryResourceStore {
        let store = InMemoryResourceStore::new(ResourceCollection::Stories);
        for (title, views) in [("Bravo", 10), ("Alpha", 30), ("Charlie", 20)] {
            store.save(attrs(json!({ "title": title, "views": views }))).await.unwrap();
        }
        store.save(attrs(json!({ "views": 5 }))).await.unwrap();
        store
    }

    #[actix_web::test]
    async fn test_crud_cycle() {
        let store = InMemoryResourceStore::new(ResourceCollection::Moments);

        let created = store.save(attrs(json!({ "id": 99, "caption": "first" }))).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.attributes.get("id"), None);

        let found = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.attributes["caption"], "first");

        let updated = store.update(1, attrs(json!({ "caption": "edited" }))).await.unwrap().unwrap();
        assert_eq!(updated.attributes["caption"], "edited");
        assert!(store.update(42, attrs(json!({}))).await.unwrap().is_none());

        assert!(store.delete_by_id(1).await.unwrap());
        assert!(!store.delete_by_id(1).await.unwrap());
        assert!(store.find_by_id(1).await.unwrap().is_none());

        let next = store.save(attrs(json!({}))).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[actix_web::test]
    async fn test_paging_in_id_order() {
        let store = seeded_store().await;

        let first = store.find_all(&PageRequest::of(0, 3)).await.unwrap();
        assert_eq!(first.content.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(first.total_elements, 4);
        assert_eq!(first.total_pages, 2);

        let second = store.find_all(&PageRequest::of(1, 3)).await.unwrap();
        assert_eq!(second.content.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4]);
        assert_eq!(second.number, 1);

        let beyond = store.find_all(&PageRequest::of(5, 3)).await.unwrap();
        assert!(beyond.content.is_empty());
        assert_eq!(beyond.total_elements, 4);
    }

    #[actix_web::test]
    async fn test_sorting() {
        let store = seeded_store().await;

        let by_title = store
            .find_all(&PageRequest::of(0, 10).with_sort("title", SortDirection::Asc))
            .await
            .unwrap();
        // 속성이 없는 문서(null)가 먼저
        assert_eq!(by_title.content.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 2, 1, 3]);

        let by_views_desc = store
            .find_all(&PageRequest::of(0, 10).with_sort("views", SortDirection::Desc))
            .await
            .unwrap();
        assert_eq!(by_views_desc.content.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1, 4]);

        let by_id_desc = store
            .find_all(&PageRequest::of(0, 2).with_sort("id", SortDirection::Desc))
            .await
            .unwrap();
        assert_eq!(by_id_desc.content.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 3]);
    }

    #[test]
    fn test_compare_values_across_types() {
        assert_eq!(compare_values(&Value::Null, &json!(false)), Ordering::Less);
        assert_eq!(compare_values(&json!(1.5), &json!(2)), Ordering::Less);
        assert_eq!(compare_values(&json!("b"), &json!("a")), Ordering::Greater);
        assert_eq!(compare_values(&json!(100), &json!("1")), Ordering::Less);
    }
}
