//! Session gate tests: protected prefixes redirect, public paths pass

mod common;

use axum::http::{header, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::*;

async fn login_token(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/session/login",
            json!({ "address": "abc", "provider": "google" }),
        ))
        .await
        .unwrap();
    session_token(&response)
}

#[tokio::test]
async fn test_protected_paths_redirect_without_cookie() {
    let app = test_app();

    for path in ["/profile", "/protected/x"] {
        let response = app
            .clone()
            .oneshot(empty_request("GET", path))
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::TEMPORARY_REDIRECT,
            "path {path}"
        );
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }
}

#[tokio::test]
async fn test_protected_paths_redirect_with_invalid_cookie() {
    let app = test_app();
    let valid = login_token(&app).await;

    // Tamper with the signature segment.
    let mut forged = valid.clone();
    let flipped = if forged.ends_with('A') { 'B' } else { 'A' };
    forged.pop();
    forged.push(flipped);

    for token in ["garbage", forged.as_str()] {
        let response = app
            .clone()
            .oneshot(request_with_cookie("GET", "/profile", token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }
}

#[tokio::test]
async fn test_protected_path_allows_valid_session() {
    let app = test_app();
    let token = login_token(&app).await;

    let response = app
        .clone()
        .oneshot(request_with_cookie("GET", "/profile", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // An unregistered route under a protected prefix passes the gate and
    // falls through to the router's 404, rather than redirecting.
    let response = app
        .oneshot(request_with_cookie("GET", "/protected/x", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_paths_ignore_cookie_state() {
    let app = test_app();

    // No cookie
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/public"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Garbage cookie: still no redirect, no error
    let response = app
        .clone()
        .oneshot(request_with_cookie("GET", "/public", "garbage"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for path in ["/", "/health"] {
        let response = app
            .clone()
            .oneshot(empty_request("GET", path))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn test_session_endpoints_are_not_gated() {
    let app = test_app();

    // The login endpoint itself must be reachable without a session.
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/session/login",
            json!({ "address": "abc", "provider": "google" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
