//! Navigation side-effect capability.
//!
//! The 401 handler forces a client-side redirect to the login screen; what
//! "navigate" means belongs to the shell (router push, location change), so
//! it is injected rather than performed here.

use std::sync::{Mutex, PoisonError};

/// Performs a client-side navigation to an application path.
pub trait Navigator: Send + Sync {
    /// Navigate to `path` (an application-internal path such as `/login`).
    fn navigate(&self, path: &str);
}

/// Navigator for headless contexts: navigation requests are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _path: &str) {}
}

/// Navigator that records requested paths instead of acting on them.
///
/// Useful for shells that defer routing to their own event loop, and for
/// asserting redirect behavior in tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths navigated to, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<String> {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner).push(path.to_owned());
    }
}
