#![allow(dead_code)]

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;

use todo_rest_api::test_helpers::test_router;

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn app(db: MockDatabase) -> Router {
    test_router(db.into_connection())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    with_raw_body(method, uri, &body.to_string())
}

pub fn with_raw_body(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, bytes.to_vec())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let json: Value = serde_json::from_slice(&bytes).expect("body should be json");
    (status, json)
}

pub fn assert_error_body(json: &Value, status: StatusCode) {
    assert_eq!(json["status"], status.as_u16());
    assert!(json["message"].is_string(), "missing message in {json}");
}
