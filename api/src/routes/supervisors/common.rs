use db::models::supervisor::{self, SupervisorFields};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct SupervisorRequest {
    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: Option<i64>,

    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,

    #[validate(email(message = "email_address must be a valid email"))]
    pub email_address: String,

    #[serde(default)]
    pub contact_number: String,
}

impl From<SupervisorRequest> for SupervisorFields {
    fn from(req: SupervisorRequest) -> Self {
        Self {
            student_id: req.student_id,
            first_name: req.first_name.trim().to_string(),
            last_name: req.last_name.trim().to_string(),
            email_address: req.email_address.trim().to_lowercase(),
            contact_number: req.contact_number,
        }
    }
}

/// Rejects an address already held by another supervisor.
pub async fn ensure_email_free(
    db: &DatabaseConnection,
    email: &str,
    except_id: Option<i64>,
) -> Result<(), ApiError> {
    if supervisor::Model::email_taken(db, email, except_id).await? {
        return Err(ApiError::Validation("Email address already in use".into()));
    }
    Ok(())
}
