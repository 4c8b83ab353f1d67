#![allow(dead_code)]

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use chirpy::{db::DocumentStore, routes::API_PREFIX, test_helpers::test_router};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

pub const SECRET: &[u8] = b"test-secret";

pub struct TestApp {
    pub dir: TempDir,
    pub store: DocumentStore,
    pub router: Router,
}

pub async fn app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::open(dir.path().join("database.json"))
        .await
        .unwrap();
    let router = test_router(store.clone(), SECRET);
    TestApp { dir, store, router }
}

pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

pub fn json_request(method: &str, path: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(api_path(path))
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, path: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(api_path(path));
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

/// Sends `req` and returns the status with the whole JSON envelope.
pub async fn send_envelope(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = router.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], status.as_u16());
    (status, json)
}

/// Sends `req` and returns the status with the envelope's `data` field.
pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, json) = send_envelope(router, req).await;
    (status, json["data"].clone())
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn register(router: &Router, email: &str, password: &str) -> Value {
    let (status, user) = send(
        router,
        json_request(
            "POST",
            "/users",
            None,
            serde_json::json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    user
}

pub async fn login(router: &Router, email: &str, password: &str) -> Value {
    let (status, body) = send(
        router,
        json_request(
            "POST",
            "/login",
            None,
            serde_json::json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}
