//! Error taxonomy for the client layer.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures propagate to the caller unchanged; a 401 is
//! surfaced as [`ApiError::Unauthorized`] because it also triggers session
//! eviction inside the pipeline. Callers that render errors should prefer
//! [`ApiError::server_message`] and fall back to their own wording.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every API operation in this crate.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL could not be used to build a request.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The HTTP exchange itself failed (connection, TLS, timeout, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body was not the JSON shape the caller asked for.
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// A multipart upload part could not be assembled.
    #[error("invalid multipart part: {0}")]
    Multipart(String),
    /// The server answered 401; the local session has been evicted.
    #[error("request to {path} was rejected as unauthorized")]
    Unauthorized {
        /// Request path that observed the 401.
        path: String,
        /// Server-provided `message` field, when the body carried one.
        message: Option<String>,
    },
    /// The server answered with a non-success status other than 401.
    #[error("request to {path} failed with status {status}")]
    Status {
        /// Request path that failed.
        path: String,
        /// HTTP status code.
        status: u16,
        /// Server-provided `message` field, when the body carried one.
        message: Option<String>,
    },
}

impl ApiError {
    /// The human-readable message the server attached to a failure response,
    /// if any. Login and register surfaces prefer this over fixed wording.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } | Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether this error is the 401 class that evicted the session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
