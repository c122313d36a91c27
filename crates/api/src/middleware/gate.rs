//! Session gate middleware
//!
//! Centralized route protection: requests to configured path prefixes must
//! carry a valid session cookie or they are redirected to the public
//! landing path. Applied as a single layer over the whole router so a new
//! protected route never needs (and cannot forget) its own check.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::state::SessionState;
use crate::SESSION_COOKIE;

/// Static gate configuration: which path prefixes require a session, and
/// where unauthenticated requests go. Same redirect target for every
/// prefix; there is no return-to-original-path mechanism.
#[derive(Debug, Clone)]
pub struct GatePolicy {
    pub protected_prefixes: Vec<String>,
    pub redirect_to: String,
}

impl GatePolicy {
    /// Whether `path` falls under any protected prefix.
    pub fn protects(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

/// Gate evaluation, run before any handler.
///
/// Public paths skip the cookie lookup entirely. On a protected path,
/// every failure mode (no cookie, malformed, bad signature, expired)
/// produces the same redirect; the sub-reason is only logged.
pub async fn session_gate(
    State(state): State<SessionState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if !state.gate.protects(path) {
        return next.run(req).await;
    }

    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        tracing::debug!(path, "no session cookie, redirecting");
        return Redirect::temporary(&state.gate.redirect_to).into_response();
    };

    match state.codec.verify(cookie.value()) {
        Ok(claims) => {
            tracing::debug!(path, provider = %claims.provider, "session verified");
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!(path, error = %e, "session rejected, redirecting");
            Redirect::temporary(&state.gate.redirect_to).into_response()
        }
    }
}
