use axum::{Json, extract::State};
use db::models::supervisor::{self, SupervisorFields};
use util::state::AppState;

use super::common::{SupervisorRequest, ensure_email_free};
use crate::auth::{PathParam, ValidJson};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// PUT /supervisors/{supervisor_id}
///
/// Keeping one's own email address is allowed.
pub async fn update_supervisor(
    State(state): State<AppState>,
    PathParam(supervisor_id): PathParam<i64>,
    ValidJson(req): ValidJson<SupervisorRequest>,
) -> Result<Json<ApiResponse<supervisor::Model>>, ApiError> {
    let fields = SupervisorFields::from(req);
    ensure_email_free(state.db(), &fields.email_address, Some(supervisor_id)).await?;

    let updated = supervisor::Model::update(state.db(), supervisor_id, fields)
        .await?
        .ok_or_else(|| ApiError::NotFound("Supervisor not found".into()))?;
    Ok(Json(ApiResponse::success(
        updated,
        "Supervisor updated successfully",
    )))
}
