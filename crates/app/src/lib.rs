//! Walletgate application composition root
//!
//! Builds the session codec and gate policy from configuration and
//! composes them with the API routes into a single router. The gate is
//! layered over the whole router so it also covers requests that match no
//! route: an unregistered path under a protected prefix still redirects
//! instead of silently becoming public.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use walletgate_api::{session_gate, GatePolicy, SessionState};
use walletgate_common::Config;
use walletgate_session::{SessionCodec, SessionConfig};

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config) -> Router {
    let codec = SessionCodec::new(&SessionConfig {
        secret: config.session_secret.clone(),
        default_max_age_seconds: config.session_max_age_seconds,
    });

    let state = SessionState {
        codec: Arc::new(codec),
        gate: Arc::new(GatePolicy {
            protected_prefixes: config.protected_prefixes.clone(),
            redirect_to: config.signin_redirect.clone(),
        }),
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Walletgate v0.1.0" }))
        .route("/profile", get(profile))
        .merge(walletgate_api::create_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_gate,
        ))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// The signed-in landing page; reachable only through the gate.
async fn profile() -> &'static str {
    "Profile"
}
