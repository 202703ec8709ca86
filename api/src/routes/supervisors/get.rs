use axum::{Json, extract::State};
use db::models::supervisor;
use db::views::{self, NamedId};
use util::state::AppState;

use crate::auth::PathParam;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// GET /supervisors
pub async fn list_supervisors(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<supervisor::Model>>>, ApiError> {
    let supervisors = supervisor::Model::list(state.db()).await?;
    Ok(Json(ApiResponse::success(
        supervisors,
        "Supervisors retrieved successfully",
    )))
}

/// GET /supervisors/{supervisor_id}
pub async fn get_supervisor(
    State(state): State<AppState>,
    PathParam(supervisor_id): PathParam<i64>,
) -> Result<Json<ApiResponse<supervisor::Model>>, ApiError> {
    let supervisor = supervisor::Model::get_by_id(state.db(), supervisor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Supervisor not found".into()))?;
    Ok(Json(ApiResponse::success(
        supervisor,
        "Supervisor retrieved successfully",
    )))
}

/// GET /supervisors/ids
///
/// Id and display name of every supervisor, for pickers.
pub async fn list_supervisor_names(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<NamedId>>>, ApiError> {
    let names = views::supervisor_names(state.db()).await?;
    Ok(Json(ApiResponse::success(
        names,
        "Supervisor ids retrieved successfully",
    )))
}
