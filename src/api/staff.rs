//! Staff management endpoints.

use serde_json::Value;

use crate::error::ApiError;
use crate::net::ApiClient;

/// `POST /api/users/create-staff` — invite a staff member.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn create_staff_user(client: &ApiClient, data: &Value) -> Result<Value, ApiError> {
    client.post("/api/users/create-staff", data).await.map_err(|error| {
        tracing::error!(%error, "failed to create staff user");
        error
    })
}

/// `POST /api/users/remove-role` — revoke a role assignment.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn remove_user_role(client: &ApiClient, data: &Value) -> Result<Value, ApiError> {
    client.post("/api/users/remove-role", data).await.map_err(|error| {
        tracing::error!(%error, "failed to remove user role");
        error
    })
}

/// `GET /api/users/school/:id` — every user attached to a school.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_school_users(client: &ApiClient, school_id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/users/school/{school_id}")).await.map_err(|error| {
        tracing::error!(%error, school_id, "failed to fetch school users");
        error
    })
}
