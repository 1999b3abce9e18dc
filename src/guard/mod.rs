//! Route guards — navigation decisions taken before a page loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell's router asks these guards before completing a navigation and
//! performs whatever redirect they return. Guards only decide; they never
//! navigate themselves. In contexts without durable storage the session is
//! undecidable, so guards allow and leave enforcement to the interactive run.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod role;

pub use role::RoleGuard;

use crate::session::SessionStore;

/// Routes reachable without a session.
pub const PUBLIC_PATHS: &[&str] =
    &["/login", "/contact", "/forgot-password", "/reset-password", "/set-password"];

/// Login route guards redirect unauthenticated visitors to.
pub const LOGIN_PATH: &str = "/login";

/// Home route used for "you don't belong here" redirects.
pub const HOME_PATH: &str = "/";

/// What a guard decided about a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation complete.
    Allow,
    /// Redirect instead of completing the navigation.
    Redirect {
        /// Destination path.
        path: String,
        /// Query parameters to carry along.
        query: Vec<(String, String)>,
    },
}

impl GuardDecision {
    /// Plain redirect without query parameters.
    #[must_use]
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect { path: path.into(), query: Vec::new() }
    }

    /// Whether the navigation may proceed.
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// The navigation a guard is asked about.
#[derive(Clone, Copy, Debug)]
pub struct RouteTarget<'a> {
    /// Route path without query, e.g. `/dashboard`.
    pub path: &'a str,
    /// Full requested path including query, preserved across a login
    /// round trip.
    pub full_path: &'a str,
    /// Whether the route is declared for signed-out visitors only.
    pub guest_only: bool,
}

impl<'a> RouteTarget<'a> {
    /// Target for a plain path (no query, no guest flag).
    #[must_use]
    pub fn new(path: &'a str) -> Self {
        Self { path, full_path: path, guest_only: false }
    }
}

/// The app-wide guard, evaluated on every navigation.
///
/// Unauthenticated visits to non-public routes bounce to the login screen,
/// carrying the requested path as the `redirect` query so the shell can
/// resume after login. Authenticated visits to the login screen bounce home.
#[must_use]
pub fn app_guard(session: &SessionStore, target: &RouteTarget<'_>) -> GuardDecision {
    if !session.is_available() {
        return GuardDecision::Allow;
    }
    let authenticated = session.token().is_some();
    let public = PUBLIC_PATHS.contains(&target.path);

    if !public && !authenticated {
        return GuardDecision::Redirect {
            path: LOGIN_PATH.to_owned(),
            query: vec![("redirect".to_owned(), target.full_path.to_owned())],
        };
    }
    if authenticated && target.path == LOGIN_PATH {
        return GuardDecision::redirect(HOME_PATH);
    }
    GuardDecision::Allow
}

/// Guard for routes flagged guest-only: signed-in users are sent home.
#[must_use]
pub fn guest_guard(session: &SessionStore, target: &RouteTarget<'_>) -> GuardDecision {
    if !session.is_available() {
        return GuardDecision::Allow;
    }
    if target.guest_only && session.token().is_some() {
        return GuardDecision::redirect(HOME_PATH);
    }
    GuardDecision::Allow
}
