use axum::{Json, extract::State};
use chrono::Utc;
use db::models::attendance;
use db::reconcile::{Action, Location};
use util::state::AppState;

use super::common::AttendanceRequest;
use crate::auth::{StudentId, ValidJson};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// POST /attendance
///
/// Checks the student in or out for the current UTC day.
///
/// ### Request Body
/// ```json
/// { "check_in": true, "latitude": -25.75, "longitude": 28.23 }
/// ```
/// `check_in_lat` / `check_in_long` are accepted as aliases.
///
/// ### Responses
/// - `200 OK` with the day's attendance record
/// - `400 Bad Request` (bad `student-id` header or body)
/// - `404 Not Found` (`No check-in found for today`, or unknown student)
pub async fn record_attendance(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
    ValidJson(req): ValidJson<AttendanceRequest>,
) -> Result<Json<ApiResponse<attendance::Model>>, ApiError> {
    let action = Action::from_check_in_flag(req.check_in);
    let location = Location {
        latitude: req.latitude,
        longitude: req.longitude,
    };

    let record =
        attendance::Model::record(state.db(), student_id, action, Utc::now(), location).await?;

    let message = match action {
        Action::CheckIn => "Checked in successfully",
        Action::CheckOut => "Checked out successfully",
    };
    Ok(Json(ApiResponse::success(record, message)))
}
