//! Student enrollment endpoints.

use serde_json::{Value, json};

use crate::error::ApiError;
use crate::net::ApiClient;

/// `POST /api/student-classrooms/enroll` — place a student in a classroom.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn enroll_student(
    client: &ApiClient,
    student_id: i64,
    classroom_id: i64,
    family_id: i64,
) -> Result<Value, ApiError> {
    client
        .post(
            "/api/student-classrooms/enroll",
            &json!({
                "student_id": student_id,
                "classroom_id": classroom_id,
                "family_id": family_id,
            }),
        )
        .await
        .map_err(|error| {
            tracing::error!(%error, student_id, classroom_id, "failed to enroll student");
            error
        })
}

/// `POST /api/student-classrooms/unenroll` — take a student out of a
/// classroom.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn unenroll_student(
    client: &ApiClient,
    student_id: i64,
    classroom_id: i64,
) -> Result<Value, ApiError> {
    client
        .post(
            "/api/student-classrooms/unenroll",
            &json!({ "student_id": student_id, "classroom_id": classroom_id }),
        )
        .await
        .map_err(|error| {
            tracing::error!(%error, student_id, classroom_id, "failed to unenroll student");
            error
        })
}

/// `GET /api/families/:id/enrollments` — a family's active enrollments.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_family_enrollments(
    client: &ApiClient,
    family_id: i64,
) -> Result<Value, ApiError> {
    client.get(&format!("/api/families/{family_id}/enrollments")).await.map_err(|error| {
        tracing::error!(%error, family_id, "failed to fetch family enrollments");
        error
    })
}
