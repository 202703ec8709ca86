use axum::{Json, body::Bytes, extract::State};
use chrono::Utc;
use db::models::{
    authorized_device,
    otp::{self, OtpValidation},
};
use util::{config, state::AppState};

use super::common::{
    GenerateOtpRequest, OtpResponse, ValidateOtpRequest, ValidateOtpResponse,
    VerifyDeviceRequest, VerifyDeviceResponse,
};
use crate::auth::extractors::optional_json;
use crate::auth::{OtpCodeHeader, StudentId, ValidJson};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// POST /generate-otp
///
/// Issues a fresh one-time password for a student. Any unused code the student
/// still holds is invalidated first.
///
/// The student comes from the `student-id` header, or from the body when the
/// header is absent:
/// ```json
/// { "student_id": 42 }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "student_id": 42, "otp_code": "0381", "expires_at": "2024-10-01T08:30:00Z" },
///   "message": "OTP generated successfully"
/// }
/// ```
/// - `400 Bad Request` (missing or malformed student id)
/// - `404 Not Found` (unknown student)
pub async fn generate_otp(
    State(state): State<AppState>,
    student: Option<StudentId>,
    body: Bytes,
) -> Result<Json<ApiResponse<OtpResponse>>, ApiError> {
    let student_id = match student {
        Some(StudentId(id)) => id,
        None => optional_json::<GenerateOtpRequest>(&body)?
            .unwrap_or_default()
            .student_id
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::Validation("student_id is required".into()))?,
    };

    let otp = otp::Model::generate(state.db(), student_id, Utc::now()).await?;

    Ok(Json(ApiResponse::success(
        OtpResponse::from(otp),
        "OTP generated successfully",
    )))
}

/// POST /validate-otp
///
/// Checks a code sent in the `otp-code` header (or `{"otp_code": "..."}`) and
/// spends it. With device pairing enabled a long-lived `secret_code` is issued.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "student_id": 42, "secret_code": "9f86d0…" },
///   "message": "Authentication successful"
/// }
/// ```
/// - `400 Bad Request` (no code supplied)
/// - `401 Unauthorized` with one of `Invalid OTP`, `OTP has already been used`,
///   `OTP has expired`
pub async fn validate_otp(
    State(state): State<AppState>,
    OtpCodeHeader(header_code): OtpCodeHeader,
    body: Bytes,
) -> Result<Json<ApiResponse<ValidateOtpResponse>>, ApiError> {
    let code = match header_code {
        Some(code) => code,
        None => optional_json::<ValidateOtpRequest>(&body)?
            .unwrap_or_default()
            .otp_code
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ApiError::Validation("OTP code is required".into()))?,
    };

    let outcome =
        otp::Model::validate(state.db(), &code, Utc::now(), config::device_pairing()).await?;

    let message = outcome.message();
    match outcome {
        OtpValidation::Valid {
            student_id,
            secret_code,
        } => Ok(Json(ApiResponse::success(
            ValidateOtpResponse {
                student_id,
                secret_code,
            },
            message,
        ))),
        _ => {
            tracing::warn!(reason = message, "OTP validation failed");
            Err(ApiError::Unauthorized(message.into()))
        }
    }
}

/// POST /verify-device-auth
///
/// Confirms that a device secret was issued to the given student.
///
/// ### Request Body
/// ```json
/// { "student_id": 42, "secret_code": "9f86d0…" }
/// ```
///
/// ### Responses
/// - `200 OK` with `{ "authorized": true }`
/// - `400 Bad Request` (validation failure)
/// - `401 Unauthorized` (unknown secret)
pub async fn verify_device_auth(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<VerifyDeviceRequest>,
) -> Result<Json<ApiResponse<VerifyDeviceResponse>>, ApiError> {
    if authorized_device::Model::verify(state.db(), req.student_id, &req.secret_code).await? {
        Ok(Json(ApiResponse::success(
            VerifyDeviceResponse { authorized: true },
            "Device authorized",
        )))
    } else {
        Err(ApiError::Unauthorized("Device not authorized".into()))
    }
}
