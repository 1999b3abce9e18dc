//! Role-gated routes.
//!
//! One guard, parameterized by the required role tag. The check needs the
//! user's role assignments, which only the API knows, so this guard performs
//! a network call inside navigation resolution — the router waits on it.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use super::{GuardDecision, HOME_PATH, LOGIN_PATH};
use crate::api;
use crate::net::ApiClient;
use crate::net::types::UserRoles;

/// Requires the current user to hold a role in the selected school.
#[derive(Clone, Debug)]
pub struct RoleGuard {
    role: String,
}

impl RoleGuard {
    /// Guard for an arbitrary role tag.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }

    /// Guard for the school-director role.
    #[must_use]
    pub fn director() -> Self {
        Self::new("director")
    }

    /// Decide the navigation.
    ///
    /// Redirects to login without a signed-in user, home without a selected
    /// school, and home again on a role mismatch or any lookup failure —
    /// a page the user may not see must never load because the check errored.
    pub async fn check(&self, client: &ApiClient) -> GuardDecision {
        let session = client.session();
        let Some(user) = session.user() else {
            return GuardDecision::redirect(LOGIN_PATH);
        };
        let Some(school_id) = session.current_school_id() else {
            return GuardDecision::redirect(HOME_PATH);
        };

        match api::users::fetch_user_roles(client, user.id).await {
            Ok(response) => {
                if holds_role(&response.roles, school_id, &self.role) {
                    GuardDecision::Allow
                } else {
                    GuardDecision::redirect(HOME_PATH)
                }
            }
            Err(error) => {
                tracing::error!(%error, user_id = user.id, "role lookup failed; denying access");
                GuardDecision::redirect(HOME_PATH)
            }
        }
    }
}

/// Whether `roles` contains `role` for the school `school_id`.
/// Role tags compare case-insensitively; school ids exactly.
fn holds_role(roles: &UserRoles, school_id: i64, role: &str) -> bool {
    roles
        .schools
        .iter()
        .any(|entry| entry.context.id == school_id && entry.role.eq_ignore_ascii_case(role))
}
