use axum::{Json, extract::State};
use db::models::student;
use util::state::AppState;

use super::common::StudentRequest;
use crate::auth::{PathParam, ValidJson};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// PUT /students/{student_id}
///
/// Replaces every mutable field; omitted optional fields are cleared.
pub async fn update_student(
    State(state): State<AppState>,
    PathParam(student_id): PathParam<i64>,
    ValidJson(req): ValidJson<StudentRequest>,
) -> Result<Json<ApiResponse<student::Model>>, ApiError> {
    let updated = student::Model::update(state.db(), student_id, req.into())
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
    Ok(Json(ApiResponse::success(
        updated,
        "Student updated successfully",
    )))
}
