//! Token issuance and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::{SessionClaims, SessionIdentity};
use crate::config::SessionConfig;
use crate::error::SessionError;

/// Signs and verifies session tokens with a single HS256 secret.
///
/// Constructed once at process start from explicit configuration and shared
/// by reference; the secret is immutable for the process lifetime, so
/// rotating it requires a restart and invalidates all outstanding tokens.
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_max_age: u64,
}

impl SessionCodec {
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is enforced by `verify_at` with zero leeway; jsonwebtoken's
        // own exp check allows `now == exp` and applies 60s leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.secret.as_ref()),
            validation,
            default_max_age: config.default_max_age_seconds,
        }
    }

    /// Issue a token for `identity`, expiring `max_age` seconds from now.
    ///
    /// `max_age` falls back to the configured default (7 days unless
    /// overridden). Non-empty `address`/`provider` and a nonzero `max_age`
    /// are caller contracts, not re-validated here.
    pub fn issue(
        &self,
        identity: &SessionIdentity,
        max_age: Option<u64>,
    ) -> Result<String, SessionError> {
        self.issue_at(identity, max_age, unix_now())
    }

    /// Clock-injected form of [`issue`](Self::issue).
    pub fn issue_at(
        &self,
        identity: &SessionIdentity,
        max_age: Option<u64>,
        now: u64,
    ) -> Result<String, SessionError> {
        let max_age = max_age.unwrap_or(self.default_max_age);
        let claims = SessionClaims {
            address: identity.address.clone(),
            provider: identity.provider.clone(),
            iat: now,
            exp: now + max_age,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::debug!(error = %e, "session token encoding failed");
            SessionError::Encoding
        })
    }

    /// Verify a token and return its claims.
    ///
    /// Signature comparison is constant-time (delegated to the HMAC
    /// verification inside `jsonwebtoken`). A token is valid strictly
    /// before its expiry timestamp: verification fails at `now == exp`.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        self.verify_at(token, unix_now())
    }

    /// Clock-injected form of [`verify`](Self::verify).
    pub fn verify_at(&self, token: &str, now: u64) -> Result<SessionClaims, SessionError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "session token rejected");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::BadSignature,
                    _ => SessionError::Malformed,
                }
            })?;

        if now >= data.claims.exp {
            tracing::debug!(exp = data.claims.exp, now, "session token expired");
            return Err(SessionError::Expired);
        }

        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}
