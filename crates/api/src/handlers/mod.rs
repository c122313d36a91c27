//! HTTP request handlers

pub mod sessions;
