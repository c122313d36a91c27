//! Verification failure taxonomy
//!
//! The discriminant exists for internal diagnostics only. HTTP surfaces
//! must collapse every variant into one uniform "invalid session" outcome
//! so a client cannot distinguish an expired token from a forged one.

/// Session token failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Claims could not be serialized and signed
    #[error("token encoding failed")]
    Encoding,

    /// Token could not be decoded into claims
    #[error("malformed token")]
    Malformed,

    /// Signature did not match (tampered token or wrong secret)
    #[error("signature mismatch")]
    BadSignature,

    /// Token past its expiry timestamp
    #[error("token expired")]
    Expired,
}
