//! Domain API wrappers.
//!
//! DESIGN
//! ======
//! One module per backend domain, one function per endpoint, every function a
//! single HTTP call through the shared [`crate::net::ApiClient`]. Wrappers
//! log failures and rethrow them unchanged; none of them touches auth state —
//! that stays with `api::auth` and the session facade.

pub mod auth;
pub mod classrooms;
pub mod cursus;
pub mod families;
pub mod payments;
pub mod pricing;
pub mod schools;
pub mod staff;
pub mod statistics;
pub mod students;
pub mod users;

use serde::Serialize;

/// Common pagination/filter query for list endpoints.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Free-text search filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict results to one school.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<i64>,
}

impl ListParams {
    /// Page `page` with the backend's default page size.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self { page: Some(page), ..Self::default() }
    }
}
