//! Family payment endpoints.
//!
//! Payments hang off a family: one settlement sheet per family, mutated line
//! by line.

use serde_json::Value;

use crate::error::ApiError;
use crate::net::ApiClient;

/// `GET /api/families/:id/paiements` — the family's settlement sheet.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_payment_details(client: &ApiClient, family_id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/families/{family_id}/paiements")).await.map_err(|error| {
        tracing::error!(%error, family_id, "failed to fetch payment details");
        error
    })
}

/// `POST /api/families/:id/paiements/lignes` — record a payment line.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn add_payment_line(
    client: &ApiClient,
    family_id: i64,
    data: &Value,
) -> Result<Value, ApiError> {
    client.post(&format!("/api/families/{family_id}/paiements/lignes"), data).await.map_err(
        |error| {
            tracing::error!(%error, family_id, "failed to add payment line");
            error
        },
    )
}

/// `PUT /api/families/:id/paiements/lignes/:line` — amend a payment line.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn update_payment_line(
    client: &ApiClient,
    family_id: i64,
    line_id: i64,
    data: &Value,
) -> Result<Value, ApiError> {
    client
        .put(&format!("/api/families/{family_id}/paiements/lignes/{line_id}"), data)
        .await
        .map_err(|error| {
            tracing::error!(%error, family_id, line_id, "failed to update payment line");
            error
        })
}

/// `DELETE /api/families/:id/paiements/lignes/:line` — drop a payment line.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn delete_payment_line(
    client: &ApiClient,
    family_id: i64,
    line_id: i64,
) -> Result<Value, ApiError> {
    client
        .delete(&format!("/api/families/{family_id}/paiements/lignes/{line_id}"))
        .await
        .map_err(|error| {
            tracing::error!(%error, family_id, line_id, "failed to delete payment line");
            error
        })
}
