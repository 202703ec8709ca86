use axum::{Json, extract::State};
use chrono::{NaiveDate, Utc};
use common::dates::parse_flexible_date;
use db::models::attendance;
use util::state::AppState;

use super::common::RangeQuery;
use crate::auth::{QueryParams, StudentId};
use crate::error::ApiError;
use crate::response::ApiResponse;

fn parse_day(raw: Option<&str>, name: &str, default: NaiveDate) -> Result<NaiveDate, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => parse_flexible_date(s)
            .ok_or_else(|| ApiError::Validation(format!("Invalid {name} date '{s}'"))),
    }
}

/// GET /attendance?from=YYYY-MM-DD&to=YYYY-MM-DD
///
/// Lists the student's records between two days (inclusive, newest first).
/// Both bounds default to today.
pub async fn list_attendance(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
    QueryParams(range): QueryParams<RangeQuery>,
) -> Result<Json<ApiResponse<Vec<attendance::Model>>>, ApiError> {
    let today = Utc::now().date_naive();
    let from = parse_day(range.from.as_deref(), "from", today)?;
    let to = parse_day(range.to.as_deref(), "to", today)?;
    if from > to {
        return Err(ApiError::Validation("from must not be after to".into()));
    }

    let records = attendance::Model::find_range(state.db(), student_id, from, to).await?;
    Ok(Json(ApiResponse::success(
        records,
        "Attendance retrieved successfully",
    )))
}
