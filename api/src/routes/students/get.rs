use axum::{Json, extract::State};
use db::models::student;
use util::state::AppState;

use crate::auth::PathParam;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// GET /students
///
/// All students ordered by id.
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<student::Model>>>, ApiError> {
    let students = student::Model::list(state.db()).await?;
    Ok(Json(ApiResponse::success(
        students,
        "Students retrieved successfully",
    )))
}

/// GET /students/{student_id}
///
/// ### Responses
/// - `200 OK` with the student
/// - `404 Not Found` (`Student not found`)
pub async fn get_student(
    State(state): State<AppState>,
    PathParam(student_id): PathParam<i64>,
) -> Result<Json<ApiResponse<student::Model>>, ApiError> {
    let student = student::Model::get_by_id(state.db(), student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
    Ok(Json(ApiResponse::success(
        student,
        "Student retrieved successfully",
    )))
}
