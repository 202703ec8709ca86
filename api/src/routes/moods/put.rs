use axum::{Json, extract::State};
use db::models::mood;
use util::state::AppState;

use super::common::{MoodRequest, ensure_student};
use crate::auth::{PathParam, ValidJson};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// PUT /moods/{mood_id}
///
/// The original `recorded_at` is kept.
pub async fn update_mood(
    State(state): State<AppState>,
    PathParam(mood_id): PathParam<i64>,
    ValidJson(req): ValidJson<MoodRequest>,
) -> Result<Json<ApiResponse<mood::Model>>, ApiError> {
    ensure_student(state.db(), req.student_id).await?;

    let updated = mood::Model::update(
        state.db(),
        mood_id,
        req.student_id,
        req.emotion.trim(),
        req.is_daily,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Mood not found".into()))?;
    Ok(Json(ApiResponse::success(updated, "Mood updated successfully")))
}
