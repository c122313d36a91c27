//! Route definitions for the Walletgate API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::sessions, state::SessionState};

/// Create session lifecycle routes
pub fn session_routes() -> Router<SessionState> {
    Router::new()
        .route("/api/session/login", post(sessions::login))
        .route("/api/session/refresh", post(sessions::refresh))
        .route("/api/session/user", get(sessions::user))
        .route("/api/session/validate", get(sessions::validate))
        .route("/api/session/logout", post(sessions::logout))
}

/// Create all API routes
pub fn create_routes() -> Router<SessionState> {
    Router::new().merge(session_routes())
}
