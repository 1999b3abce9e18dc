//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is owned by explicit, cloneable handles the shell threads to
//! whatever needs them — no module-level globals. Each handle exposes
//! snapshots, never live references, so renders read a consistent view.

pub mod auth;
pub mod flash;

pub use auth::{Auth, AuthState};
pub use flash::{FlashKind, FlashMessage, FlashState};
