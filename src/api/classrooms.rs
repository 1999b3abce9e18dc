//! Classroom endpoints.

#[cfg(test)]
#[path = "classrooms_test.rs"]
mod classrooms_test;

use chrono::Datelike;
use serde_json::{Value, json};

use super::ListParams;
use crate::error::ApiError;
use crate::net::ApiClient;
use crate::session::SessionStore;

/// School used when neither the draft nor storage names one.
const FALLBACK_SCHOOL_ID: i64 = 1;

/// Classroom form data as captured by the shell.
///
/// [`create_classroom`] and [`update_classroom`] turn this into the payload
/// shape the backend expects, filling the school from the selected-school
/// storage entry, the year from the calendar, and the type with `"Standard"`
/// when the form left them blank.
#[derive(Clone, Debug, Default)]
pub struct ClassroomDraft {
    /// Classroom display name.
    pub name: String,
    /// Cursus the classroom teaches.
    pub cursus_id: i64,
    /// Level within the cursus.
    pub level_id: Option<i64>,
    /// Audience restriction, when the school separates groups.
    pub gender: Option<String>,
    /// Seat capacity.
    pub size: Option<i64>,
    /// Owning school; defaults to the selected school on create.
    pub school_id: Option<i64>,
    /// School year; defaults to the current calendar year.
    pub years: Option<i32>,
    /// Classroom type tag; defaults to `"Standard"`.
    pub kind: Option<String>,
    /// Invite link of the classroom's Telegram group.
    pub telegram_link: Option<String>,
    /// Weekly schedule entries, backend-defined shape.
    pub schedules: Vec<Value>,
}

impl ClassroomDraft {
    fn create_payload(&self, session: &SessionStore) -> Value {
        let school_id = self
            .school_id
            .or_else(|| session.current_school_id())
            .unwrap_or(FALLBACK_SCHOOL_ID);
        json!({
            "name": self.name,
            "cursus_id": self.cursus_id,
            "level_id": self.level_id,
            "gender": self.gender,
            "size": self.size,
            "school_id": school_id,
            "years": self.years.unwrap_or_else(current_year),
            "type": self.kind.as_deref().unwrap_or("Standard"),
            "telegram_link": self.telegram_link,
            "schedules": self.schedules,
        })
    }

    fn update_payload(&self) -> Value {
        // Updates never move a classroom between schools.
        json!({
            "name": self.name,
            "cursus_id": self.cursus_id,
            "level_id": self.level_id,
            "gender": self.gender,
            "size": self.size,
            "years": self.years.unwrap_or_else(current_year),
            "type": self.kind.as_deref().unwrap_or("Standard"),
            "telegram_link": self.telegram_link,
            "schedules": self.schedules,
        })
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// `GET /api/classrooms`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn list_classrooms(client: &ApiClient, params: &ListParams) -> Result<Value, ApiError> {
    client.get_query("/api/classrooms", params).await.map_err(|error| {
        tracing::error!(%error, "failed to list classrooms");
        error
    })
}

/// `GET /api/classrooms/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_classroom(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/classrooms/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to fetch classroom");
        error
    })
}

/// `POST /api/classrooms`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn create_classroom(client: &ApiClient, draft: &ClassroomDraft) -> Result<Value, ApiError> {
    let payload = draft.create_payload(client.session());
    client.post("/api/classrooms", &payload).await.map_err(|error| {
        tracing::error!(%error, "failed to create classroom");
        error
    })
}

/// `PUT /api/classrooms/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn update_classroom(
    client: &ApiClient,
    id: i64,
    draft: &ClassroomDraft,
) -> Result<Value, ApiError> {
    client.put(&format!("/api/classrooms/{id}"), &draft.update_payload()).await.map_err(|error| {
        tracing::error!(%error, id, "failed to update classroom");
        error
    })
}

/// `DELETE /api/classrooms/:id`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn delete_classroom(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client.delete(&format!("/api/classrooms/{id}")).await.map_err(|error| {
        tracing::error!(%error, id, "failed to delete classroom");
        error
    })
}

/// `GET /api/users/classroom/:id` — users enrolled in a classroom.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_classroom_users(client: &ApiClient, classroom_id: i64) -> Result<Value, ApiError> {
    client.get(&format!("/api/users/classroom/{classroom_id}")).await.map_err(|error| {
        tracing::error!(%error, classroom_id, "failed to fetch classroom users");
        error
    })
}

/// `GET /api/admin/classrooms` — cross-school listing for administrators.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn list_admin_classrooms(
    client: &ApiClient,
    params: &ListParams,
) -> Result<Value, ApiError> {
    client.get_query("/api/admin/classrooms", params).await.map_err(|error| {
        tracing::error!(%error, "failed to list admin classrooms");
        error
    })
}

/// `DELETE /api/admin/classrooms/:classroom/students/:student` — pull a
/// student out of a classroom.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn remove_student(
    client: &ApiClient,
    classroom_id: i64,
    student_id: i64,
) -> Result<Value, ApiError> {
    client
        .delete(&format!("/api/admin/classrooms/{classroom_id}/students/{student_id}"))
        .await
        .map_err(|error| {
            tracing::error!(%error, classroom_id, student_id, "failed to remove student from classroom");
            error
        })
}
