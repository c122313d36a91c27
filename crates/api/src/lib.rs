//! HTTP surface for Walletgate
//!
//! Session endpoints (login, refresh, user, validate, logout) plus the
//! route-protection gate middleware. The cookie is the sole persisted
//! state; there is no server-side session store.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::SessionRejection;
pub use middleware::{session_gate, GatePolicy};
pub use routes::create_routes;
pub use state::SessionState;

/// Name of the session cookie.
///
/// Must be consistent between the handlers that set it and the gate that
/// reads it.
pub const SESSION_COOKIE: &str = "session";
