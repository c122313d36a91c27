//! Shared configuration for Walletgate

pub mod config;

pub use config::Config;
