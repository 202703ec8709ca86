use axum::{extract::State, http::StatusCode};
use db::models::employer;
use util::state::AppState;

use crate::auth::PathParam;
use crate::error::ApiError;

/// DELETE /employers/{employer_id}
pub async fn delete_employer(
    State(state): State<AppState>,
    PathParam(employer_id): PathParam<i64>,
) -> Result<StatusCode, ApiError> {
    if !employer::Model::delete(state.db(), employer_id).await? {
        return Err(ApiError::NotFound("Employer not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
