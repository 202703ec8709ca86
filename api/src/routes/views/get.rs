use axum::{Json, extract::State};
use chrono::Utc;
use db::views::{self, DashboardRow, EmployeeSummary, ManagementRow, TraineeProfile};
use util::{config, state::AppState};

use crate::auth::StudentId;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DashboardRow>>>, ApiError> {
    let rows = views::dashboard(state.db()).await?;
    Ok(Json(ApiResponse::success(
        rows,
        "Dashboard retrieved successfully",
    )))
}

/// GET /management
///
/// Every student with employer, supervisor and the newest OTP issued to them.
pub async fn management(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ManagementRow>>>, ApiError> {
    let rows = views::management(state.db()).await?;
    Ok(Json(ApiResponse::success(
        rows,
        "Management table retrieved successfully",
    )))
}

/// GET /trainee-profile
///
/// Student details, the last daily moods and the last attendance records next
/// to the scheduled shift. History length is `RECENT_HISTORY_LIMIT`.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` (missing or invalid `student-id` header)
/// - `404 Not Found` (`Student not found`)
pub async fn trainee_profile(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
) -> Result<Json<ApiResponse<TraineeProfile>>, ApiError> {
    let profile = views::trainee_profile(state.db(), student_id, config::recent_history_limit())
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
    Ok(Json(ApiResponse::success(
        profile,
        "Trainee profile retrieved successfully",
    )))
}

/// GET /employee-summary
///
/// Attendance before today, the student's remarks and recent daily moods.
pub async fn employee_summary(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
) -> Result<Json<ApiResponse<EmployeeSummary>>, ApiError> {
    let today = Utc::now().date_naive();
    let summary = views::employee_summary(
        state.db(),
        student_id,
        today,
        config::recent_history_limit(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
    Ok(Json(ApiResponse::success(
        summary,
        "Employee summary retrieved successfully",
    )))
}
