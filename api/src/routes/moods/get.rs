use axum::{Json, extract::State};
use db::models::mood;
use util::state::AppState;

use super::common::MoodQuery;
use crate::auth::{PathParam, QueryParams};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// GET /moods?student_id=
///
/// Newest first. `student_id` narrows the log to one student.
pub async fn list_moods(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<MoodQuery>,
) -> Result<Json<ApiResponse<Vec<mood::Model>>>, ApiError> {
    let moods = mood::Model::list(state.db(), query.student_id).await?;
    Ok(Json(ApiResponse::success(
        moods,
        "Moods retrieved successfully",
    )))
}

/// GET /moods/{mood_id}
pub async fn get_mood(
    State(state): State<AppState>,
    PathParam(mood_id): PathParam<i64>,
) -> Result<Json<ApiResponse<mood::Model>>, ApiError> {
    let mood = mood::Model::get_by_id(state.db(), mood_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Mood not found".into()))?;
    Ok(Json(ApiResponse::success(mood, "Mood retrieved successfully")))
}
