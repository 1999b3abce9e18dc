//! Cursus endpoints.

use serde_json::Value;

use super::ListParams;
use crate::error::ApiError;
use crate::net::ApiClient;

/// `GET /api/cursus`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn list_cursus(client: &ApiClient, params: &ListParams) -> Result<Value, ApiError> {
    client.get_query("/api/cursus", params).await.map_err(|error| {
        tracing::error!(%error, "failed to list cursus");
        error
    })
}

/// `GET /api/cursus/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_cursus(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/cursus/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to fetch cursus");
        error
    })
}

/// `POST /api/cursus`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn create_cursus(client: &ApiClient, data: &Value) -> Result<Value, ApiError> {
    client.post("/api/cursus", data).await.map_err(|error| {
        tracing::error!(%error, "failed to create cursus");
        error
    })
}

/// `PUT /api/cursus/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn update_cursus(client: &ApiClient, id: i64, data: &Value) -> Result<Value, ApiError> {
    client.put(&format!("/api/cursus/{id}"), data).await.map_err(|error| {
        tracing::error!(%error, id, "failed to update cursus");
        error
    })
}

/// `DELETE /api/cursus/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn delete_cursus(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.delete(&format!("/api/cursus/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to delete cursus");
        error
    })
}
