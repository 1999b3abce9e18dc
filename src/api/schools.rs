//! School endpoints.
//!
//! Create and update go out as `multipart/form-data` because the form can
//! carry a logo image; update tunnels through POST with a `_method=PUT`
//! field, which is the shape the backend expects for uploads.

#[cfg(test)]
#[path = "schools_test.rs"]
mod schools_test;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::ListParams;
use crate::error::ApiError;
use crate::net::ApiClient;

/// A logo image attached to a school create/update.
#[derive(Clone, Debug)]
pub struct LogoUpload {
    /// Original file name, forwarded to the backend.
    pub filename: String,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
}

/// Assemble the multipart form for a school mutation.
///
/// Scalar fields come from `fields` (a JSON object; nulls are skipped,
/// non-strings are rendered as their JSON text, matching what the backend
/// parses). `method_override` adds the `_method` tunnel field for updates.
fn school_form(
    fields: &Value,
    logo: Option<&LogoUpload>,
    method_override: Option<&str>,
) -> Result<Form, ApiError> {
    let mut form = Form::new();
    if let Some(method) = method_override {
        form = form.text("_method", method.to_owned());
    }
    if let Some(entries) = fields.as_object() {
        for (key, value) in entries {
            let rendered = match value {
                Value::Null => continue,
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            form = form.text(key.clone(), rendered);
        }
    }
    if let Some(logo) = logo {
        let part = Part::bytes(logo.bytes.clone())
            .file_name(logo.filename.clone())
            .mime_str(&logo.content_type)
            .map_err(|error| ApiError::Multipart(error.to_string()))?;
        form = form.part("logo", part);
    }
    Ok(form)
}

/// `GET /api/schools`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn list_schools(client: &ApiClient, params: &ListParams) -> Result<Value, ApiError> {
    client.get_query("/api/schools", params).await.map_err(|error| {
        tracing::error!(%error, "failed to list schools");
        error
    })
}

/// `GET /api/schools/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_school(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/schools/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to fetch school");
        error
    })
}

/// `POST /api/schools` — multipart, optional logo.
///
/// # Errors
///
/// Propagates the request failure, or [`ApiError::Multipart`] if the logo
/// part cannot be assembled.
pub async fn create_school(
    client: &ApiClient,
    fields: &Value,
    logo: Option<&LogoUpload>,
) -> Result<Value, ApiError> {
    let form = school_form(fields, logo, None)?;
    client.post_multipart("/api/schools", form).await.map_err(|error| {
        tracing::error!(%error, "failed to create school");
        error
    })
}

/// `POST /api/schools/:id` with `_method=PUT` — multipart update.
///
/// # Errors
///
/// Propagates the request failure, or [`ApiError::Multipart`] if the logo
/// part cannot be assembled.
pub async fn update_school(
    client: &ApiClient,
    id: i64,
    fields: &Value,
    logo: Option<&LogoUpload>,
) -> Result<Value, ApiError> {
    let form = school_form(fields, logo, Some("PUT"))?;
    client.post_multipart(&format!("/api/schools/{id}"), form).await.map_err(|error| {
        tracing::error!(%error, id, "failed to update school");
        error
    })
}

/// `DELETE /api/schools/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn delete_school(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.delete(&format!("/api/schools/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to delete school");
        error
    })
}

/// `GET /api/schools/:id/families` — families enrolled at a school.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_school_families(client: &ApiClient, school_id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/schools/{school_id}/families")).await.map_err(|error| {
        tracing::error!(%error, school_id, "failed to fetch school families");
        error
    })
}
