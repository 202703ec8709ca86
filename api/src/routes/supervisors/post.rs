use axum::{Json, extract::State, http::StatusCode};
use db::models::supervisor::{self, SupervisorFields};
use util::state::AppState;

use super::common::{SupervisorRequest, ensure_email_free};
use crate::auth::ValidJson;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// POST /supervisors
///
/// ### Request Body
/// ```json
/// {
///   "first_name": "Naledi",
///   "last_name": "Sithole",
///   "email_address": "naledi@example.com",
///   "contact_number": "0821234567",
///   "student_id": 3
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (invalid fields, or `Email address already in use`)
pub async fn create_supervisor(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<SupervisorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<supervisor::Model>>), ApiError> {
    let fields = SupervisorFields::from(req);
    ensure_email_free(state.db(), &fields.email_address, None).await?;

    let created = supervisor::Model::create(state.db(), fields).await?;
    tracing::info!(supervisor_id = created.id, "Supervisor created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            created,
            "Supervisor created successfully",
        )),
    ))
}
