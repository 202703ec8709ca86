use axum::{extract::State, http::StatusCode};
use db::models::student;
use util::state::AppState;

use crate::auth::PathParam;
use crate::error::ApiError;

/// DELETE /students/{student_id}
///
/// Removes the student together with their attendance, moods, OTPs and
/// paired devices.
///
/// ### Responses
/// - `204 No Content`
/// - `404 Not Found` (`Student not found`)
pub async fn delete_student(
    State(state): State<AppState>,
    PathParam(student_id): PathParam<i64>,
) -> Result<StatusCode, ApiError> {
    if !student::Model::delete(state.db(), student_id).await? {
        return Err(ApiError::NotFound("Student not found".into()));
    }
    tracing::info!(student_id, "Student deleted");
    Ok(StatusCode::NO_CONTENT)
}
