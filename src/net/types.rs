//! Wire DTOs shared across the API wrappers.
//!
//! DESIGN
//! ======
//! Only the shapes the client logic actually inspects are typed (identity,
//! auth payloads, role lookups). Everything the shell merely displays stays
//! `serde_json::Value` so backend additions never break deserialization, and
//! typed records keep an open-ended `extra` map for the same reason.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An authenticated user as returned by the login and register endpoints and
/// cached in the session store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact email, if the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Open-ended per-deployment attributes (avatar, locale, phone, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Credentials submitted to `POST /api/login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Plaintext password; only ever sent over the wire, never stored.
    pub password: String,
}

/// Registration form submitted to `POST /api/register`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterData {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation echo.
    pub password_confirmation: String,
    /// Deployment-specific extra fields (invitation token, phone, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Successful login/register response: the bearer token plus the user it
/// authenticates. Persisted as a [`crate::session::Session`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    /// Opaque bearer token.
    pub token: String,
    /// The authenticated user record.
    pub user: User,
}

/// Payload for `POST /api/reset-password`.
#[derive(Clone, Debug, Serialize)]
pub struct PasswordReset {
    /// Reset token from the email link.
    pub token: String,
    /// Account email.
    pub email: String,
    /// New password.
    pub password: String,
    /// New password confirmation echo.
    pub password_confirmation: String,
}

/// Payload for the reset/invitation token check endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct TokenCheck {
    /// Token under verification.
    pub token: String,
    /// Account email, when the endpoint wants it cross-checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload for `POST /api/set-password` (invitation flow).
#[derive(Clone, Debug, Serialize)]
pub struct SetPassword {
    /// Invitation token.
    pub token: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation echo.
    pub password_confirmation: String,
}

/// Response of `GET /api/users/:id/roles`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RolesResponse {
    /// Role assignments grouped by context kind.
    pub roles: UserRoles,
}

/// Role assignments for one user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRoles {
    /// Per-school role assignments.
    #[serde(default)]
    pub schools: Vec<SchoolRole>,
    /// Other context kinds this client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One role held within one school.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolRole {
    /// The school the role applies to.
    pub context: RoleContext,
    /// Role tag, e.g. `"Director"`; compared case-insensitively.
    pub role: String,
}

/// Context of a role assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleContext {
    /// School identifier.
    pub id: i64,
}
