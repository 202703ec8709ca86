use axum::{Json, extract::State};
use db::models::employer;
use util::state::AppState;

use super::common::EmployerRequest;
use crate::auth::{PathParam, ValidJson};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// PUT /employers/{employer_id}
pub async fn update_employer(
    State(state): State<AppState>,
    PathParam(employer_id): PathParam<i64>,
    ValidJson(req): ValidJson<EmployerRequest>,
) -> Result<Json<ApiResponse<employer::Model>>, ApiError> {
    let updated = employer::Model::update(state.db(), employer_id, req.into())
        .await?
        .ok_or_else(|| ApiError::NotFound("Employer not found".into()))?;
    Ok(Json(ApiResponse::success(
        updated,
        "Employer updated successfully",
    )))
}
