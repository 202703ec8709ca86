use axum::{extract::State, http::StatusCode};
use db::models::supervisor;
use util::state::AppState;

use crate::auth::PathParam;
use crate::error::ApiError;

/// DELETE /supervisors/{supervisor_id}
pub async fn delete_supervisor(
    State(state): State<AppState>,
    PathParam(supervisor_id): PathParam<i64>,
) -> Result<StatusCode, ApiError> {
    if !supervisor::Model::delete(state.db(), supervisor_id).await? {
        return Err(ApiError::NotFound("Supervisor not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
