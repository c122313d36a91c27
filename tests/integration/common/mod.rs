//! Shared helpers for integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use walletgate_common::Config;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config() -> Config {
    Config {
        session_secret: TEST_SECRET.to_string(),
        session_max_age_seconds: 604_800,
        protected_prefixes: vec!["/profile".to_string(), "/protected".to_string()],
        signin_redirect: "/".to_string(),
        log_level: "info".to_string(),
        rust_log: "walletgate=debug".to_string(),
        port: 3000,
    }
}

pub fn test_app() -> Router {
    walletgate_app::create_app(&test_config())
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request_with_cookie(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, format!("session={token}"))
        .body(Body::empty())
        .unwrap()
}

/// Pull the session token out of a response's Set-Cookie header.
pub fn session_token(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap();

    let pair = set_cookie.split(';').next().unwrap();
    let (name, value) = pair.split_once('=').unwrap();
    assert_eq!(name, "session");
    value.to_string()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
