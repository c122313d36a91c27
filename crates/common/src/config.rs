//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables once at startup
//! and treated as immutable for the process lifetime. A missing signing
//! secret is a fatal startup error, never a per-request error.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Secret used to sign session tokens. Rotating it requires a restart
    /// and invalidates every outstanding token.
    pub session_secret: String,

    /// Default session token lifetime in seconds
    pub session_max_age_seconds: u64,

    /// Path prefixes that require a valid session
    pub protected_prefixes: Vec<String>,

    /// Where the gate sends unauthenticated requests
    pub signin_redirect: String,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            session_secret: env::var("SESSION_SECRET")
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET is required"))?,

            session_max_age_seconds: env::var("SESSION_MAX_AGE_SECONDS")
                .unwrap_or_else(|_| "604800".to_string())
                .parse()
                .unwrap_or(604_800),

            protected_prefixes: env::var("PROTECTED_PREFIXES")
                .unwrap_or_else(|_| "/profile,/protected".to_string())
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),

            signin_redirect: env::var("SIGNIN_REDIRECT").unwrap_or_else(|_| "/".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "walletgate=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
