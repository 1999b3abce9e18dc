//! School statistics endpoints — dashboards, payment search, trends.

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::net::ApiClient;

/// Query for `unpaid_families`.
#[derive(Clone, Debug, Serialize)]
pub struct UnpaidFamiliesParams {
    /// School under inspection.
    pub school_id: i64,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl UnpaidFamiliesParams {
    /// Unpaginated query for `school_id`.
    #[must_use]
    pub fn new(school_id: i64) -> Self {
        Self { school_id, page: None, per_page: None }
    }
}

/// Query for the paginated payment search.
#[derive(Clone, Debug, Serialize)]
pub struct PaymentSearchParams {
    /// School under inspection.
    pub school_id: i64,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// What `search_value` matches against (family name, payer, reference).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
    /// Search needle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    /// Restrict to one receiving bank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

impl PaymentSearchParams {
    /// Unfiltered first page for `school_id`.
    #[must_use]
    pub fn new(school_id: i64) -> Self {
        Self {
            school_id,
            page: None,
            per_page: None,
            search_type: None,
            search_value: None,
            bank: None,
        }
    }
}

/// `GET /api/statistics/overview` — headline numbers for one school.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_overview(client: &ApiClient, school_id: i64) -> Result<Value, ApiError> {
    client
        .get_query("/api/statistics/overview", &[("school_id", school_id)])
        .await
        .map_err(|error| {
            tracing::error!(%error, school_id, "failed to fetch statistics overview");
            error
        })
}

/// `GET /api/statistics/unpaid-families`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_unpaid_families(
    client: &ApiClient,
    params: &UnpaidFamiliesParams,
) -> Result<Value, ApiError> {
    client.get_query("/api/statistics/unpaid-families", params).await.map_err(|error| {
        tracing::error!(%error, school_id = params.school_id, "failed to fetch unpaid families");
        error
    })
}

/// `POST /api/statistics/search-payments` — one-shot payment lookup.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn search_payments(
    client: &ApiClient,
    search_type: &str,
    search_value: &str,
    school_id: i64,
) -> Result<Value, ApiError> {
    client
        .post(
            "/api/statistics/search-payments",
            &json!({
                "search_type": search_type,
                "search_value": search_value,
                "school_id": school_id,
            }),
        )
        .await
        .map_err(|error| {
            tracing::error!(%error, school_id, "failed to search payments");
            error
        })
}

/// `GET /api/statistics/payments` — paginated payment search.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn search_payments_paginated(
    client: &ApiClient,
    params: &PaymentSearchParams,
) -> Result<Value, ApiError> {
    client.get_query("/api/statistics/payments", params).await.map_err(|error| {
        tracing::error!(%error, school_id = params.school_id, "failed to search payments");
        error
    })
}

/// `GET /api/statistics/enrollment-trends`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_enrollment_trends(client: &ApiClient, school_id: i64) -> Result<Value, ApiError> {
    client
        .get_query("/api/statistics/enrollment-trends", &[("school_id", school_id)])
        .await
        .map_err(|error| {
            tracing::error!(%error, school_id, "failed to fetch enrollment trends");
            error
        })
}

/// `GET /api/statistics/revenue-by-month`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_revenue_by_month(client: &ApiClient, school_id: i64) -> Result<Value, ApiError> {
    client
        .get_query("/api/statistics/revenue-by-month", &[("school_id", school_id)])
        .await
        .map_err(|error| {
            tracing::error!(%error, school_id, "failed to fetch monthly revenue");
            error
        })
}

/// `GET /api/statistics/available-banks` — banks payments were received on,
/// for the search filter.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_available_banks(client: &ApiClient, school_id: i64) -> Result<Value, ApiError> {
    client
        .get_query("/api/statistics/available-banks", &[("school_id", school_id)])
        .await
        .map_err(|error| {
            tracing::error!(%error, school_id, "failed to fetch available banks");
            error
        })
}
