//! Resource Collection HTTP Handlers
//!
//! 스토리, vly, 모먼트, revly 컬렉션이 공유하는 CRUD 엔드포인트입니다.
//! 컬렉션은 라우트 스코프의 `app_data`로 주입됩니다.
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::{Map, Value};

use crate::core::ServiceRegistry;
use crate::domain::{CollectionResponse, PageQuery, ResourceCollection};
use crate::errors::AppError;

fn not_found(collection: ResourceCollection, id: i64) -> AppError {
    AppError::NotFound(format!("{} {}", collection, id))
}

/// 페이지 단위 목록 조회
///
/// # Endpoint
/// `GET /{collection}?page=0&size=20&sort=title,desc`
#[get("")]
pub async fn list_resources(
    registry: web::Data<ServiceRegistry>,
    collection: web::Data<ResourceCollection>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let collection = **collection;
    let request = query.to_page_request()?;

    let page = registry.store(collection)?.find_all(&request).await?;

    Ok(HttpResponse::Ok().json(CollectionResponse::new(collection, page)))
}

/// # Endpoint
/// `POST /{collection}`
#[post("")]
pub async fn create_resource(
    registry: web::Data<ServiceRegistry>,
    collection: web::Data<ResourceCollection>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let collection = **collection;
    let resource = registry.store(collection)?.save(payload.into_inner()).await?;

    log::info!("{} 생성: id={}", collection, resource.id);
    Ok(HttpResponse::Created().json(resource))
}

/// # Endpoint
/// `GET /{collection}/{id}`
#[get("/{id}")]
pub async fn get_resource(
    registry: web::Data<ServiceRegistry>,
    collection: web::Data<ResourceCollection>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let collection = **collection;
    let id = id.into_inner();

    let resource = registry
        .store(collection)?
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(collection, id))?;

    Ok(HttpResponse::Ok().json(resource))
}

/// 속성 전체 교체
///
/// # Endpoint
/// `PUT /{collection}/{id}`
#[put("/{id}")]
pub async fn update_resource(
    registry: web::Data<ServiceRegistry>,
    collection: web::Data<ResourceCollection>,
    id: web::Path<i64>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let collection = **collection;
    let id = id.into_inner();

    let resource = registry
        .store(collection)?
        .update(id, payload.into_inner())
        .await?
        .ok_or_else(|| not_found(collection, id))?;

    Ok(HttpResponse::Ok().json(resource))
}

/// # Endpoint
/// `DELETE /{collection}/{id}`
#[delete("/{id}")]
pub async fn delete_resource(
    registry: web::Data<ServiceRegistry>,
    collection: web::Data<ResourceCollection>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let collection = **collection;
    let id = id.into_inner();

    if !registry.store(collection)?.delete_by_id(id).await? {
        return Err(not_found(collection, id));
    }

    log::info!("{} 삭제: id={}", collection, id);
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::handlers::test_support::{login_token, test_registry};
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_collections_require_authentication() {
        let registry = test_registry(1);
        let app = test::init_service(App::new().app_data(registry.clone()).configure(configure_all_routes)).await;

        for path in ["/api/v1/stories", "/api/v1/vlyes", "/api/v1/moments/1", "/api/v1/revlyes"] {
            let req = test::TestRequest::get().uri(path).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED, "{}", path);
        }
    }

    #[actix_web::test]
    async fn test_crud_over_http() {
        let registry = test_registry(1);
        let app = test::init_service(App::new().app_data(registry.clone()).configure(configure_all_routes)).await;
        let auth = ("Authorization", format!("Bearer {}", login_token(&registry, "alice").await));

        let req = test::TestRequest::post()
            .uri("/api/v1/stories")
            .insert_header(auth.clone())
            .set_json(json!({ "title": "first", "id": 500 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["title"], "first");

        let req = test::TestRequest::put()
            .uri("/api/v1/stories/1")
            .insert_header(auth.clone())
            .set_json(json!({ "title": "second" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["title"], "second");

        let req = test::TestRequest::get()
            .uri("/api/v1/stories/1")
            .insert_header(auth.clone())
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, json!({ "id": 1, "title": "second" }));

        let req = test::TestRequest::delete()
            .uri("/api/v1/stories/1")
            .insert_header(auth.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri("/api/v1/stories/1")
            .insert_header(auth.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri("/api/v1/stories/1")
            .insert_header(auth)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_returns_collection_page() {
        let registry = test_registry(1);
        let app = test::init_service(App::new().app_data(registry.clone()).configure(configure_all_routes)).await;
        let auth = ("Authorization", format!("Bearer {}", login_token(&registry, "alice").await));

        for caption in ["b", "a", "c"] {
            let req = test::TestRequest::post()
                .uri("/api/v1/moments")
                .insert_header(auth.clone())
                .set_json(json!({ "caption": caption }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/v1/moments?page=0&size=2&sort=caption,desc")
            .insert_header(auth.clone())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let captions: Vec<&str> = body["_embedded"]["moments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["caption"].as_str().unwrap())
            .collect();
        assert_eq!(captions, vec!["c", "b"]);
        assert_eq!(body["page"], json!({ "size": 2, "totalElements": 3, "totalPages": 2, "number": 0 }));

        // 다른 컬렉션과 저장소를 공유하지 않음
        let req = test::TestRequest::get()
            .uri("/api/v1/revlyes")
            .insert_header(auth.clone())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["page"]["totalElements"], 0);

        let req = test::TestRequest::get()
            .uri("/api/v1/moments?size=5000")
            .insert_header(auth)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}
