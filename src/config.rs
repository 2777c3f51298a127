//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL is the one piece of configuration this crate
//! consumes. It is resolved once at app startup and handed to
//! components via context, so the form never reads environment or
//! globals itself. `AppConfig::new` covers deployments that pin the
//! URL in code; `AppConfig::from_env` bakes in `BACKEND_URL` at
//! compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8787";

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
}

impl AppConfig {
    /// Build a config with an explicit backend base URL.
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self { backend_url: normalize_base_url(&backend_url.into()) }
    }

    /// Build a config from the compile-time `BACKEND_URL` environment
    /// variable, falling back to [`DEFAULT_BACKEND_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }
}

/// Trim trailing slashes so endpoint joining yields a single `/`.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}
