//! Session token codec for Walletgate
//!
//! Signs an `(address, provider)` identity into a compact, time-bounded
//! token string and verifies it back into claims. Tokens are stateless:
//! there is no server-side session store, validity is fully determined by
//! re-checking the signature and expiry at read time.

mod claims;
mod codec;
mod config;
mod error;

pub use claims::{SessionClaims, SessionIdentity};
pub use codec::SessionCodec;
pub use config::SessionConfig;
pub use error::SessionError;

/// Default token lifetime: 7 days.
pub const DEFAULT_MAX_AGE_SECONDS: u64 = 604_800;
