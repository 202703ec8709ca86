//! Error taxonomy of the HTTP surface.
//!
//! Every handler returns `Result<_, ApiError>`; the error renders as the
//! standard [`ApiResponse`] envelope with the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::otp::OtpError;
use db::reconcile::AttendanceError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::response::{ApiResponse, Empty};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Failed OTP or device authentication.
    #[error("{0}")]
    Unauthorized(String),

    /// Storage failure; the cause is logged, never returned.
    #[error("storage error: {0}")]
    Storage(#[from] DbErr),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Storage(e) => {
                tracing::error!(error = %e, "Storage failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(ApiResponse::<Empty>::error(message))).into_response()
    }
}

impl From<AttendanceError> for ApiError {
    fn from(e: AttendanceError) -> Self {
        match e {
            AttendanceError::InvalidStudent(_) => ApiError::Validation(e.to_string()),
            AttendanceError::StudentNotFound(_) => ApiError::NotFound("Student not found".into()),
            AttendanceError::NoCheckInToday => ApiError::NotFound(e.to_string()),
            AttendanceError::Db(db) => ApiError::Storage(db),
        }
    }
}

impl From<OtpError> for ApiError {
    fn from(e: OtpError) -> Self {
        match e {
            OtpError::StudentNotFound(_) => ApiError::NotFound("Student not found".into()),
            OtpError::Db(db) => ApiError::Storage(db),
        }
    }
}
