//! Family endpoints.

use serde_json::{Value, json};

use super::ListParams;
use crate::error::ApiError;
use crate::net::ApiClient;

/// `GET /api/families`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn list_families(client: &ApiClient, params: &ListParams) -> Result<Value, ApiError> {
    client.get_query("/api/families", params).await.map_err(|error| {
        tracing::error!(%error, "failed to list families");
        error
    })
}

/// `GET /api/families/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_family(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/families/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to fetch family");
        error
    })
}

/// `POST /api/families`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn create_family(client: &ApiClient, data: &Value) -> Result<Value, ApiError> {
    client.post("/api/families", data).await.map_err(|error| {
        tracing::error!(%error, "failed to create family");
        error
    })
}

/// `POST /api/families/:id/comments` — attach a free-text comment.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn add_comment(
    client: &ApiClient,
    family_id: i64,
    content: &str,
) -> Result<Value, ApiError> {
    client
        .post(&format!("/api/families/{family_id}/comments"), &json!({ "content": content }))
        .await
        .map_err(|error| {
            tracing::error!(%error, family_id, "failed to add family comment");
            error
        })
}

/// `POST /api/families/:id/students` — register students under a family.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn add_students(
    client: &ApiClient,
    family_id: i64,
    students: &Value,
) -> Result<Value, ApiError> {
    client
        .post(&format!("/api/families/{family_id}/students"), &json!({ "students": students }))
        .await
        .map_err(|error| {
            tracing::error!(%error, family_id, "failed to add students to family");
            error
        })
}

/// `POST /api/families/:id/responsibles` — link a responsible adult.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn add_responsible(
    client: &ApiClient,
    family_id: i64,
    user_id: i64,
) -> Result<Value, ApiError> {
    client
        .post(&format!("/api/families/{family_id}/responsibles"), &json!({ "user_id": user_id }))
        .await
        .map_err(|error| {
            tracing::error!(%error, family_id, user_id, "failed to add family responsible");
            error
        })
}
