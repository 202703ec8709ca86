use db::models::student;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct MoodRequest {
    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: i64,

    #[validate(length(min = 1, max = 64, message = "emotion must be 1-64 characters"))]
    pub emotion: String,

    /// Daily check-in mood, as opposed to an ad-hoc entry.
    #[serde(default)]
    pub is_daily: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct MoodQuery {
    pub student_id: Option<i64>,
}

pub async fn ensure_student(db: &DatabaseConnection, student_id: i64) -> Result<(), ApiError> {
    if !student::Model::exists(db, student_id).await? {
        return Err(ApiError::NotFound("Student not found".into()));
    }
    Ok(())
}
