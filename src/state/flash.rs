//! Transient flash-message state.
//!
//! One message at a time; setting a new one replaces the old. The shell
//! decides how and when to dismiss.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use std::sync::{Arc, PoisonError, RwLock};

/// Visual flavor of a flash message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashKind {
    /// Confirmation after a successful operation.
    Success,
    /// Operation failure.
    Error,
    /// Neutral notice.
    #[default]
    Info,
}

/// One message to surface to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    /// Message text, already localized.
    pub text: String,
    /// Visual flavor.
    pub kind: FlashKind,
}

/// Process-wide flash slot. Cheap to clone; clones share one slot.
#[derive(Clone, Debug, Default)]
pub struct FlashState {
    current: Arc<RwLock<Option<FlashMessage>>>,
}

impl FlashState {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently on display, if any.
    #[must_use]
    pub fn current(&self) -> Option<FlashMessage> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Show `text` with the given flavor, replacing any previous message.
    pub fn set(&self, text: impl Into<String>, kind: FlashKind) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) =
            Some(FlashMessage { text: text.into(), kind });
    }

    /// Dismiss the current message.
    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
