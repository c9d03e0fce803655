//! HTTP server integration tests
//!
//! These tests drive the router through `oneshot` requests without binding
//! a socket or starting a real browser.

use axum::http::StatusCode;
use browser_relay::{config::Settings, server::create_app, types::*};
use tower::ServiceExt;

/// Create test application for integration tests
fn create_test_app() -> axum::Router {
    let settings = Settings::default();
    create_app(settings).expect("default settings are valid")
}

/// Create test application guarded by the given API key
fn create_keyed_app(api_key: &str) -> axum::Router {
    let mut settings = Settings::default();
    settings.server.api_key = Some(api_key.to_string());
    create_app(settings).expect("settings with API key are valid")
}

fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .uri(uri)
        .method("GET")
        .body(axum::body::Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_server_ping_endpoint() {
    let app = create_test_app();

    let response = app.oneshot(get("/ping")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let ping_response: PingResponse = serde_json::from_slice(&body).unwrap();

    assert!(!ping_response.version.is_empty());
    // No navigation ran, so no browser session exists yet
    assert!(!ping_response.browser_active);
}

#[tokio::test]
async fn test_server_cleanup_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/cleanup", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["message"], "Browser closed or already closed");
}

#[tokio::test]
async fn test_navigate_rejects_invalid_json() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/navigate", "this is not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["context"], "json_deserialization");
}

#[tokio::test]
async fn test_navigate_rejects_missing_url() {
    let app = create_test_app();

    let response = app.oneshot(post_json("/navigate", "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["context"], "json_deserialization");
    assert!(json["error"].as_str().unwrap().contains("url"));
}

#[tokio::test]
async fn test_navigate_rejects_non_web_scheme() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/navigate", r#"{"url": "file:///etc/passwd"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["context"], "request_validation");
}

#[tokio::test]
async fn test_navigate_rejects_empty_url() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/navigate", r#"{"url": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["context"], "request_validation");
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get("/does_not_exist")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_server_cors_headers() {
    let app = create_test_app();

    let response = app.oneshot(get("/ping")).await.unwrap();

    // Should have CORS headers set
    let headers = response.headers();
    assert!(headers.contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_navigate_requires_api_key_when_configured() {
    let app = create_keyed_app("server-test-key");

    let response = app
        .clone()
        .oneshot(post_json("/navigate", r#"{"url": "https://example.com/"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = response_json(response).await;
    assert_eq!(json["context"], "authentication");

    // Health checks stay reachable without the key
    let response = app.oneshot(get("/ping")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cleanup_requires_api_key_when_configured() {
    let app = create_keyed_app("server-test-key");

    let response = app
        .clone()
        .oneshot(post_json("/cleanup", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = axum::http::Request::builder()
        .uri("/cleanup")
        .method("POST")
        .header("x-api-key", "server-test-key")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

/// Full round trip against a real local browser. Run explicitly with
/// `cargo test -- --ignored` on a machine with Chrome or Chromium installed.
#[tokio::test]
#[ignore]
async fn test_navigate_end_to_end_with_real_browser() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/navigate", r#"{"url": "https://example.com/"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let navigate_response: NavigateResponse = serde_json::from_slice(&body).unwrap();

    assert!(navigate_response.url.contains("example.com"));
    assert!(!navigate_response.content.is_empty());
}
