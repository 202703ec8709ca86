use axum::{extract::State, http::StatusCode};
use db::models::mood;
use util::state::AppState;

use crate::auth::PathParam;
use crate::error::ApiError;

/// DELETE /moods/{mood_id}
pub async fn delete_mood(
    State(state): State<AppState>,
    PathParam(mood_id): PathParam<i64>,
) -> Result<StatusCode, ApiError> {
    if !mood::Model::delete(state.db(), mood_id).await? {
        return Err(ApiError::NotFound("Mood not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
