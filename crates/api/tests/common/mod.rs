#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use catalog_api::config::{DatabaseDriver, LogFormat, ServerConfig};
use catalog_api::router::{build_app_router, with_middleware, App};
use catalog_api::state::AppState;
use catalog_core::repository::InMemoryCategoryRepo;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        database_driver: DatabaseDriver::Memory,
        database_url: None,
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

/// Build the full application (same middleware stack as production) over
/// the given in-memory repository.
///
/// Tests that span several requests share one repository and build a fresh
/// app per request.
pub fn build_test_app(repo: Arc<InMemoryCategoryRepo>) -> App {
    build_app_router(AppState::new(repo, test_config()))
}

/// Wrap extra routes, merged over the production routes, in the production
/// middleware stack.
pub fn build_test_app_with(extra: Router<AppState>, config: ServerConfig) -> App {
    let routes = catalog_api::routes::app_routes().merge(extra);
    with_middleware(routes, AppState::new(new_repo(), config))
}

pub fn new_repo() -> Arc<InMemoryCategoryRepo> {
    Arc::new(InMemoryCategoryRepo::new())
}

pub async fn send(app: App, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
