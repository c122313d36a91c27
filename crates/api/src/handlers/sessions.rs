//! Session lifecycle handlers
//!
//! The login endpoint assumes the external identity proof (wallet/social
//! login) has already been resolved into an `(address, provider)` pair by
//! the client; this layer only issues and rotates the session token.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use walletgate_session::SessionIdentity;

use crate::error::SessionRejection;
use crate::state::SessionState;
use crate::SESSION_COOKIE;

/// Request for establishing a session
///
/// Fields default to empty so that an absent field and an empty field are
/// rejected the same way (400, not a body-shape error).
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    /// Wallet address returned by the login flow
    #[validate(length(min = 1))]
    pub address: String,

    /// Identity method used (`google`, `twitter`, `email`, ...)
    #[validate(length(min = 1))]
    pub provider: String,
}

/// Establish a session from a resolved identity
///
/// **POST /api/session/login**
pub async fn login(
    State(state): State<SessionState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), SessionRejection> {
    req.validate()
        .map_err(|_| SessionRejection::MissingIdentity)?;

    let identity = SessionIdentity {
        address: req.address,
        provider: req.provider,
    };

    let token = state
        .codec
        .issue(&identity, None)
        .map_err(issue_failed)?;

    tracing::info!(provider = %identity.provider, "session established");

    Ok((jar.add(session_cookie(token)), Json(json!({ "ok": true }))))
}

/// Rotate a still-valid session: same identity, fresh expiry
///
/// **POST /api/session/refresh**
pub async fn refresh(
    State(state): State<SessionState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Value>), SessionRejection> {
    let cookie = jar
        .get(SESSION_COOKIE)
        .ok_or(SessionRejection::MissingSession)?;

    // Uniform rejection: the client must not learn whether the token was
    // expired, malformed, or forged.
    let claims = state
        .codec
        .verify(cookie.value())
        .map_err(|_| SessionRejection::InvalidSession)?;

    let token = state
        .codec
        .issue(&claims.identity(), None)
        .map_err(issue_failed)?;

    tracing::info!(provider = %claims.provider, "session rotated");

    Ok((jar.add(session_cookie(token)), Json(json!({ "ok": true }))))
}

/// Report the current session's identity, or null
///
/// **GET /api/session/user**. Never errors.
pub async fn user(State(state): State<SessionState>, jar: CookieJar) -> Json<Value> {
    match verified_claims(&state, &jar) {
        Some(claims) => Json(json!({ "user": claims })),
        None => Json(json!({ "user": null })),
    }
}

/// Report whether the current session is valid
///
/// **GET /api/session/validate**. Never errors.
pub async fn validate(State(state): State<SessionState>, jar: CookieJar) -> Json<Value> {
    match verified_claims(&state, &jar) {
        Some(claims) => Json(json!({ "authenticated": true, "user": claims })),
        None => Json(json!({ "authenticated": false })),
    }
}

/// Clear the session cookie
///
/// **POST /api/session/logout**. No token validation needed.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let removal = Cookie::build(SESSION_COOKIE).path("/").build();
    (jar.remove(removal), Json(json!({ "ok": true })))
}

fn verified_claims(
    state: &SessionState,
    jar: &CookieJar,
) -> Option<walletgate_session::SessionClaims> {
    let cookie = jar.get(SESSION_COOKIE)?;
    state.codec.verify(cookie.value()).ok()
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(true)
        .build()
}

fn issue_failed(e: walletgate_session::SessionError) -> SessionRejection {
    tracing::error!(error = %e, "failed to issue session token");
    SessionRejection::IssueFailed
}
