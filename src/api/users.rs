//! User endpoints.

use serde_json::Value;

use super::ListParams;
use crate::error::ApiError;
use crate::net::ApiClient;
use crate::net::types::RolesResponse;

/// `GET /api/users`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn list_users(client: &ApiClient, params: &ListParams) -> Result<Value, ApiError> {
    client.get_query("/api/users", params).await.map_err(|error| {
        tracing::error!(%error, "failed to list users");
        error
    })
}

/// `GET /api/users/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_user(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/users/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to fetch user");
        error
    })
}

/// `GET /api/users/:id/roles` — role assignments, typed because the role
/// gate interprets them.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_user_roles(client: &ApiClient, id: i64) -> Result<RolesResponse, ApiError> {
    client.get(&format!("/api/users/{id}/roles")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to fetch user roles");
        error
    })
}

/// `POST /api/users`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn create_user(client: &ApiClient, data: &Value) -> Result<Value, ApiError> {
    client.post("/api/users", data).await.map_err(|error| {
        tracing::error!(%error, "failed to create user");
        error
    })
}

/// `PUT /api/users/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn update_user(client: &ApiClient, id: i64, data: &Value) -> Result<Value, ApiError> {
    client.put(&format!("/api/users/{id}"), data).await.map_err(|error| {
        tracing::error!(%error, id, "failed to update user");
        error
    })
}

/// `PUT /api/users/:id/info` — profile fields only (no credentials).
///
/// # Errors
///
/// Propagates the request failure.
pub async fn update_user_info(client: &ApiClient, id: i64, data: &Value) -> Result<Value, ApiError> {
    client.put(&format!("/api/users/{id}/info"), data).await.map_err(|error| {
        tracing::error!(%error, id, "failed to update user info");
        error
    })
}

/// `DELETE /api/users/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn delete_user(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.delete(&format!("/api/users/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to delete user");
        error
    })
}

/// `POST /api/users/change-password` — change the caller's own password.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn change_password(client: &ApiClient, data: &Value) -> Result<Value, ApiError> {
    client.post("/api/users/change-password", data).await.map_err(|error| {
        tracing::error!(%error, "failed to change password");
        error
    })
}
