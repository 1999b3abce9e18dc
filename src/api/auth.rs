//! Authentication service — the only wrappers with session side effects.
//!
//! ARCHITECTURE
//! ============
//! Login and register persist the returned session *after* the response is
//! observed and before they return, so a caller that sees success is
//! guaranteed a consistent session store. Logout always clears local state,
//! whether or not the server acknowledged — consistent client state beats
//! server confirmation there. The password flows are stateless.

use serde_json::Value;

use crate::error::ApiError;
use crate::net::ApiClient;
use crate::net::types::{
    AuthPayload, Credentials, PasswordReset, RegisterData, SetPassword, TokenCheck, User,
};
use crate::session::Session;

/// `POST /api/login` — authenticate and persist the returned session.
///
/// On success the session store holds `{token, user}` and the client-wide
/// Authorization credential is installed. On failure the store is untouched.
///
/// # Errors
///
/// Propagates the request failure; the server message (wrong credentials,
/// locked account) is available via [`ApiError::server_message`].
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<AuthPayload, ApiError> {
    let payload: AuthPayload = client.post("/api/login", credentials).await.map_err(|error| {
        tracing::error!(%error, "login request failed");
        error
    })?;
    persist(client, &payload);
    Ok(payload)
}

/// `POST /api/register` — create an account and persist the returned session.
///
/// Same persistence contract as [`login`].
///
/// # Errors
///
/// Propagates the request failure.
pub async fn register(client: &ApiClient, data: &RegisterData) -> Result<AuthPayload, ApiError> {
    let payload: AuthPayload = client.post("/api/register", data).await.map_err(|error| {
        tracing::error!(%error, "register request failed");
        error
    })?;
    persist(client, &payload);
    Ok(payload)
}

fn persist(client: &ApiClient, payload: &AuthPayload) {
    client
        .session()
        .set(&Session { token: payload.token.clone(), user: payload.user.clone() });
    client.set_default_authorization(&payload.token);
}

/// `POST /api/logout` — end the session server-side, then clear it locally.
///
/// Local cleanup happens unconditionally; a server-side failure is returned
/// for the caller to report but changes nothing about local state.
///
/// # Errors
///
/// Returns the server-call failure after local cleanup has completed.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let outcome = client.post_empty::<Value>("/api/logout").await;
    client.session().clear();
    client.clear_default_authorization();
    match outcome {
        Ok(_) => Ok(()),
        Err(error) => {
            tracing::error!(%error, "server-side logout failed; local session cleared anyway");
            Err(error)
        }
    }
}

/// `POST /api/forgot-password` — request a reset email.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn forgot_password(client: &ApiClient, email: &str) -> Result<Value, ApiError> {
    client
        .post("/api/forgot-password", &serde_json::json!({ "email": email }))
        .await
        .map_err(|error| {
            tracing::error!(%error, "password reset request failed");
            error
        })
}

/// `POST /api/reset-password` — set a new password from a reset link.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn reset_password(client: &ApiClient, data: &PasswordReset) -> Result<Value, ApiError> {
    client.post("/api/reset-password", data).await.map_err(|error| {
        tracing::error!(%error, "password reset failed");
        error
    })
}

/// `POST /api/check-reset-token` — validate a reset token before showing the
/// form.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn check_reset_token(client: &ApiClient, data: &TokenCheck) -> Result<Value, ApiError> {
    client.post("/api/check-reset-token", data).await.map_err(|error| {
        tracing::error!(%error, "reset token check failed");
        error
    })
}

/// `POST /api/check-invitation-token` — validate an invitation token.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn check_invitation_token(
    client: &ApiClient,
    data: &TokenCheck,
) -> Result<Value, ApiError> {
    client.post("/api/check-invitation-token", data).await.map_err(|error| {
        tracing::error!(%error, "invitation token check failed");
        error
    })
}

/// `POST /api/set-password` — finish an invitation by choosing a password.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn set_password(client: &ApiClient, data: &SetPassword) -> Result<Value, ApiError> {
    client.post("/api/set-password", data).await.map_err(|error| {
        tracing::error!(%error, "set password failed");
        error
    })
}

/// The cached user record, read from the session store.
#[must_use]
pub fn current_user(client: &ApiClient) -> Option<User> {
    client.session().user()
}

/// Whether a session token is currently stored.
#[must_use]
pub fn is_authenticated(client: &ApiClient) -> bool {
    client.session().token().is_some()
}
