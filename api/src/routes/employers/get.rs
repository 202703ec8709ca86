use axum::{Json, extract::State};
use db::models::employer;
use db::views::{self, NamedId};
use util::state::AppState;

use crate::auth::PathParam;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// GET /employers
pub async fn list_employers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<employer::Model>>>, ApiError> {
    let employers = employer::Model::list(state.db()).await?;
    Ok(Json(ApiResponse::success(
        employers,
        "Employers retrieved successfully",
    )))
}

/// GET /employers/{employer_id}
pub async fn get_employer(
    State(state): State<AppState>,
    PathParam(employer_id): PathParam<i64>,
) -> Result<Json<ApiResponse<employer::Model>>, ApiError> {
    let employer = employer::Model::get_by_id(state.db(), employer_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employer not found".into()))?;
    Ok(Json(ApiResponse::success(
        employer,
        "Employer retrieved successfully",
    )))
}

/// GET /employers/ids
///
/// Id and display name of every employer, for pickers.
pub async fn list_employer_names(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<NamedId>>>, ApiError> {
    let names = views::employer_names(state.db()).await?;
    Ok(Json(ApiResponse::success(
        names,
        "Employer ids retrieved successfully",
    )))
}
