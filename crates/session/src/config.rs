//! Codec configuration

use crate::DEFAULT_MAX_AGE_SECONDS;

/// Session codec configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub default_max_age_seconds: u64,
}

impl SessionConfig {
    /// Configuration with the default 7-day token lifetime.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            default_max_age_seconds: DEFAULT_MAX_AGE_SECONDS,
        }
    }
}
