//! Client configuration — API base URL selection.
//!
//! The shell picks the remote endpoint per environment: deployed builds set
//! `TOOLLAB_API_URL`, everything else talks to a local backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable holding the deployed API origin.
pub const BASE_URL_ENV: &str = "TOOLLAB_API_URL";

/// Fallback origin used when [`BASE_URL_ENV`] is unset (local development).
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// API origin without a trailing slash, e.g. `https://api.toollab.fr`.
    pub base_url: String,
}

impl Config {
    /// Build a configuration from an explicit base URL.
    ///
    /// Trailing slashes are stripped so request paths (which all start with
    /// `/`) join deterministically.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`].
    /// A set-but-blank variable counts as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self::new(base_url)
    }
}
