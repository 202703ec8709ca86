use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use db::models::mood;
use util::state::AppState;

use super::common::{MoodRequest, ensure_student};
use crate::auth::ValidJson;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// POST /moods
///
/// ### Request Body
/// ```json
/// { "student_id": 4, "emotion": "happy", "is_daily": true }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (blank emotion, bad id)
/// - `404 Not Found` (`Student not found`)
pub async fn create_mood(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<MoodRequest>,
) -> Result<(StatusCode, Json<ApiResponse<mood::Model>>), ApiError> {
    ensure_student(state.db(), req.student_id).await?;

    let created = mood::Model::create(
        state.db(),
        req.student_id,
        req.emotion.trim(),
        req.is_daily,
        Utc::now(),
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Mood recorded successfully")),
    ))
}
