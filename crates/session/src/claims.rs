//! Session claims types

use serde::{Deserialize, Serialize};

/// Identity pair produced by the external login flow.
///
/// Both fields are opaque to this layer. `provider` is an open set
/// (`google`, `twitter`, `discord`, `github`, `email`, `sms`, or
/// `session` for a hydrated pre-existing session). Callers validate
/// non-emptiness before invoking the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Wallet address (no format validation beyond presence)
    pub address: String,
    /// Identity method used at login
    pub provider: String,
}

/// The signed token payload.
///
/// Immutable once issued; refreshing produces a new value with fresh
/// timestamps rather than mutating an old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Wallet address
    pub address: String,
    /// Identity method used at login
    pub provider: String,
    /// Issued at (seconds since epoch)
    pub iat: u64,
    /// Expires at (seconds since epoch), always greater than `iat`
    pub exp: u64,
}

impl SessionClaims {
    /// The identity embedded in these claims, without the timestamps.
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            address: self.address.clone(),
            provider: self.provider.clone(),
        }
    }
}
