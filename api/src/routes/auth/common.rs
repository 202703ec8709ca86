use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateOtpRequest {
    pub student_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct OtpResponse {
    pub student_id: i64,
    pub otp_code: String,
    pub expires_at: DateTime<Utc>,
}

impl From<db::models::otp::Model> for OtpResponse {
    fn from(otp: db::models::otp::Model) -> Self {
        Self {
            student_id: otp.student_id,
            otp_code: otp.otp_code,
            expires_at: otp.expires_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidateOtpRequest {
    pub otp_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateOtpResponse {
    pub student_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_code: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyDeviceRequest {
    #[validate(range(min = 1, message = "student_id must be a positive integer"))]
    pub student_id: i64,

    #[validate(length(min = 1, message = "secret_code is required"))]
    pub secret_code: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyDeviceResponse {
    pub authorized: bool,
}
