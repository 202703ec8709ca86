use axum::{Json, extract::State, http::StatusCode};
use db::models::student;
use util::state::AppState;

use super::common::StudentRequest;
use crate::auth::ValidJson;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// POST /students
///
/// ### Request Body
/// ```json
/// {
///   "first_name": "Lerato",
///   "last_name": "Khumalo",
///   "dob": "2002-03-14",
///   "check_in_time": "08:00",
///   "check_out_time": "16:30"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored student
/// - `400 Bad Request` (missing names, bad dates, malformed JSON)
pub async fn create_student(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<StudentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<student::Model>>), ApiError> {
    let created = student::Model::create(state.db(), req.into()).await?;
    tracing::info!(student_id = created.id, "Student created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Student created successfully")),
    ))
}
