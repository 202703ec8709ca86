use axum::{Json, extract::State};
use chrono::Utc;
use db::models::student;
use serde::Deserialize;
use util::state::AppState;
use util::ws::LocationUpdate;
use validator::Validate;

use crate::auth::{StudentId, ValidJson};
use crate::error::ApiError;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct LocationRequest {
    pub latitude: f64,

    pub longitude: f64,

    #[validate(length(max = 512))]
    pub address: Option<String>,
}

/// POST /location
///
/// Caches the device's position and pushes it to every `/ws/location` listener.
///
/// ### Request Body
/// ```json
/// { "latitude": -25.7479, "longitude": 28.2293, "address": "Hatfield, Pretoria" }
/// ```
///
/// ### Responses
/// - `200 OK` with the broadcast update
/// - `400 Bad Request` (bad header or malformed body)
/// - `404 Not Found` (`Student not found`)
pub async fn update_location(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
    ValidJson(req): ValidJson<LocationRequest>,
) -> Result<Json<ApiResponse<LocationUpdate>>, ApiError> {
    if !student::Model::exists(state.db(), student_id).await? {
        return Err(ApiError::NotFound("Student not found".into()));
    }

    let update = LocationUpdate {
        student_id,
        latitude: req.latitude,
        longitude: req.longitude,
        address: req.address.filter(|a| !a.trim().is_empty()),
        received_at: Utc::now(),
    };
    state.location().publish(update.clone()).await;

    tracing::debug!(student_id, "Location published");
    Ok(Json(ApiResponse::success(update, "Location updated")))
}
