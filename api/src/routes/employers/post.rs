use axum::{Json, extract::State, http::StatusCode};
use db::models::employer;
use util::state::AppState;

use super::common::EmployerRequest;
use crate::auth::ValidJson;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// POST /employers
///
/// `201 Created` with the stored employer, `400` when `name` is blank.
pub async fn create_employer(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<EmployerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<employer::Model>>), ApiError> {
    let created = employer::Model::create(state.db(), req.into()).await?;
    tracing::info!(employer_id = created.id, "Employer created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Employer created successfully")),
    ))
}
