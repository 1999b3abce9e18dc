//! Tarification endpoints — cursus tariffs, discount rules, and the remote
//! tariff calculator.
//!
//! The actual discount computation lives server-side; `calculate_tariffs`
//! just ships the family's planned enrollments and gets amounts back.

use serde_json::{Value, json};

use crate::error::ApiError;
use crate::net::ApiClient;

/// `GET /api/tarification/cursus` — every cursus with its current tariff.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_cursus_tariffs(client: &ApiClient) -> Result<Value, ApiError> {
    client.get("/api/tarification/cursus").await.map_err(|error| {
        tracing::error!(%error, "failed to fetch cursus tariffs");
        error
    })
}

/// `POST /api/tarification/cursus/:id/tarif` — set a cursus base price.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn update_tariff(client: &ApiClient, cursus_id: i64, price: f64) -> Result<Value, ApiError> {
    client
        .post(&format!("/api/tarification/cursus/{cursus_id}/tarif"), &json!({ "prix": price }))
        .await
        .map_err(|error| {
            tracing::error!(%error, cursus_id, "failed to update tariff");
            error
        })
}

/// `POST /api/tarification/cursus/:id/reduction-familiale` — add a sibling
/// discount rule to a cursus.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn add_family_discount(
    client: &ApiClient,
    cursus_id: i64,
    data: &Value,
) -> Result<Value, ApiError> {
    client
        .post(&format!("/api/tarification/cursus/{cursus_id}/reduction-familiale"), data)
        .await
        .map_err(|error| {
            tracing::error!(%error, cursus_id, "failed to add family discount");
            error
        })
}

/// `PUT /api/tarification/reduction-familiale/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn update_family_discount(
    client: &ApiClient,
    discount_id: i64,
    data: &Value,
) -> Result<Value, ApiError> {
    client
        .put(&format!("/api/tarification/reduction-familiale/{discount_id}"), data)
        .await
        .map_err(|error| {
            tracing::error!(%error, discount_id, "failed to update family discount");
            error
        })
}

/// `DELETE /api/tarification/reduction-familiale/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn delete_family_discount(
    client: &ApiClient,
    discount_id: i64,
) -> Result<Value, ApiError> {
    client
        .delete(&format!("/api/tarification/reduction-familiale/{discount_id}"))
        .await
        .map_err(|error| {
            tracing::error!(%error, discount_id, "failed to delete family discount");
            error
        })
}

/// `POST /api/tarification/cursus/:id/reduction-multi-cursus` — add a
/// multi-cursus discount rule.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn add_multi_cursus_discount(
    client: &ApiClient,
    cursus_id: i64,
    data: &Value,
) -> Result<Value, ApiError> {
    client
        .post(&format!("/api/tarification/cursus/{cursus_id}/reduction-multi-cursus"), data)
        .await
        .map_err(|error| {
            tracing::error!(%error, cursus_id, "failed to add multi-cursus discount");
            error
        })
}

/// `PUT /api/tarification/reduction-multi-cursus/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn update_multi_cursus_discount(
    client: &ApiClient,
    discount_id: i64,
    data: &Value,
) -> Result<Value, ApiError> {
    client
        .put(&format!("/api/tarification/reduction-multi-cursus/{discount_id}"), data)
        .await
        .map_err(|error| {
            tracing::error!(%error, discount_id, "failed to update multi-cursus discount");
            error
        })
}

/// `DELETE /api/tarification/reduction-multi-cursus/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn delete_multi_cursus_discount(
    client: &ApiClient,
    discount_id: i64,
) -> Result<Value, ApiError> {
    client
        .delete(&format!("/api/tarification/reduction-multi-cursus/{discount_id}"))
        .await
        .map_err(|error| {
            tracing::error!(%error, discount_id, "failed to delete multi-cursus discount");
            error
        })
}

/// `POST /api/tarification/calculer` — compute what a family owes for a set
/// of planned enrollments, with every discount rule applied server-side.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn calculate_tariffs(
    client: &ApiClient,
    family_id: i64,
    enrollments: &Value,
) -> Result<Value, ApiError> {
    client
        .post(
            "/api/tarification/calculer",
            &json!({ "family_id": family_id, "inscriptions": enrollments }),
        )
        .await
        .map_err(|error| {
            tracing::error!(%error, family_id, "failed to calculate tariffs");
            error
        })
}
