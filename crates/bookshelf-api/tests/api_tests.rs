//! Integration tests for the book API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Each test builds a fresh store preloaded with
//! the three sample books, so tests never observe each other's writes.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bookshelf_api::router::build_router;
use bookshelf_api::state::AppState;
use bookshelf_core::ApiConfig;
use serde_json::Value;
use tower::ServiceExt;

fn make_router() -> Router {
    build_router(Arc::new(AppState::default()), &ApiConfig::default())
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_hello() {
    let response = make_router()
        .oneshot(empty_request("GET", "/api/books/hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("application/json"));

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], "Hello from BookAPI!");
    assert_eq!(json["status"], "API is running");
    assert!(json["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_list_books() {
    let response = make_router()
        .oneshot(empty_request("GET", "/api/books"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let books = json.as_array().unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[0]["title"], "Java Programming");
    assert_eq!(books[2]["available"], false);
}

#[tokio::test]
async fn test_get_book() {
    let response = make_router()
        .oneshot(empty_request("GET", "/api/books/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["author"], "John Doe");
    assert_eq!(json["year"], 2022);
}

#[tokio::test]
async fn test_get_book_not_found() {
    let response = make_router()
        .oneshot(empty_request("GET", "/api/books/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Book not found");
    assert_eq!(json["id"], 999);
}

#[tokio::test]
async fn test_get_book_invalid_id() {
    let response = make_router()
        .oneshot(empty_request("GET", "/api/books/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_create_book() {
    let body = r#"{"title": "New Test Book", "author": "Test Author", "year": 2024, "available": true}"#;
    let response = make_router()
        .oneshot(json_request("POST", "/api/books", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], 4);
    assert_eq!(json["title"], "New Test Book");
    assert_eq!(json["author"], "Test Author");
    assert_eq!(json["year"], 2024);
}

#[tokio::test]
async fn test_create_book_minimal_data() {
    let body = r#"{"title": "Minimal Book", "author": "Unknown"}"#;
    let response = make_router()
        .oneshot(json_request("POST", "/api/books", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Minimal Book");
    assert_eq!(json["available"], true);
    assert!(json["year"].is_i64());
}

#[tokio::test]
async fn test_create_then_get() {
    let router = make_router();

    let created = router
        .clone()
        .oneshot(json_request("POST", "/api/books", r#"{"title": "Kept"}"#))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_to_json(created.into_body()).await;

    let fetched = router
        .oneshot(empty_request("GET", &format!("/api/books/{}", created["id"])))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_to_json(fetched.into_body()).await, created);
}

#[tokio::test]
async fn test_create_book_with_taken_id_conflicts() {
    let response = make_router()
        .oneshot(json_request("POST", "/api/books", r#"{"id": 2, "title": "Clash"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], 2);
}

#[tokio::test]
async fn test_create_book_malformed_json() {
    let response = make_router()
        .oneshot(json_request("POST", "/api/books", r#"{"title": "#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_create_book_without_content_type() {
    let response = make_router()
        .oneshot(
            Request::post("/api/books")
                .body(Body::from(r#"{"title": "x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_update_book() {
    let body = r#"{"title": "Updated Title", "author": "Updated Author"}"#;
    let response = make_router()
        .oneshot(json_request("PUT", "/api/books/1", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Updated Title");
    assert_eq!(json["author"], "Updated Author");
    assert_eq!(json["year"], 2022);
    assert_eq!(json["available"], true);
}

#[tokio::test]
async fn test_update_book_is_partial() {
    let router = make_router();

    let response = router
        .clone()
        .oneshot(json_request("PUT", "/api/books/2", r#"{"available": false, "title": null}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = router
        .oneshot(empty_request("GET", "/api/books/2"))
        .await
        .unwrap();
    let json = body_to_json(fetched.into_body()).await;
    assert_eq!(json["title"], "Spring Boot Guide");
    assert_eq!(json["author"], "Jane Smith");
    assert_eq!(json["available"], false);
}

#[tokio::test]
async fn test_update_book_not_found() {
    let response = make_router()
        .oneshot(json_request("PUT", "/api/books/999", r#"{"title": "Updated Title"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Book not found");
    assert_eq!(json["id"], 999);
}

#[tokio::test]
async fn test_delete_book() {
    let response = make_router()
        .oneshot(empty_request("DELETE", "/api/books/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], "Book deleted successfully");
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn test_delete_book_twice() {
    let router = make_router();

    let first = router
        .clone()
        .oneshot(empty_request("DELETE", "/api/books/2"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = router
        .clone()
        .oneshot(empty_request("DELETE", "/api/books/2"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let list = router
        .oneshot(empty_request("GET", "/api/books"))
        .await
        .unwrap();
    let json = body_to_json(list.into_body()).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_delete_book_not_found() {
    let response = make_router()
        .oneshot(empty_request("DELETE", "/api/books/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Book not found");
}

#[tokio::test]
async fn test_stats_summary() {
    let response = make_router()
        .oneshot(empty_request("GET", "/api/books/stats/summary"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["totalBooks"], 3);
    assert_eq!(json["availableBooks"], 2);
    assert_eq!(json["unavailableBooks"], 1);
}

#[tokio::test]
async fn test_custom_base_path() {
    let api = ApiConfig {
        base_path: String::from("/books"),
        ..ApiConfig::default()
    };
    let router = build_router(Arc::new(AppState::default()), &api);

    let response = router
        .clone()
        .oneshot(empty_request("GET", "/books/3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let old = router
        .oneshot(empty_request("GET", "/api/books/3"))
        .await
        .unwrap();
    assert_eq!(old.status(), StatusCode::NOT_FOUND);
}
