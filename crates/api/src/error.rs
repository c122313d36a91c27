//! Session endpoint rejections
//!
//! All verification failures are normalized at this boundary: the response
//! never distinguishes an expired token from a forged one, and no internal
//! failure detail reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Session endpoint rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRejection {
    /// Login body missing or empty `address`/`provider`
    MissingIdentity,
    /// No session cookie on a request that requires one
    MissingSession,
    /// Session cookie present but failed verification (uniform outcome)
    InvalidSession,
    /// Token issuance failed
    IssueFailed,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SessionRejection::MissingIdentity => {
                (StatusCode::BAD_REQUEST, "address and provider required")
            }
            SessionRejection::MissingSession => (StatusCode::UNAUTHORIZED, "no session"),
            SessionRejection::InvalidSession => (StatusCode::UNAUTHORIZED, "invalid session"),
            SessionRejection::IssueFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
