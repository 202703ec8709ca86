//! # auth Routes Module
//!
//! One-time password and device pairing endpoints, mounted at the `/api` root.
//!
//! ## Structure
//! - `post.rs`: POST handlers
//! - `common.rs`: request/response bodies

pub mod common;
pub mod post;

use axum::{Router, routing::post};
use util::state::AppState;

use post::{generate_otp, validate_otp, verify_device_auth};

/// Builds the OTP route group.
///
/// - `POST /generate-otp` → `generate_otp`
/// - `POST /validate-otp` → `validate_otp`
/// - `POST /verify-device-auth` → `verify_device_auth`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-otp", post(generate_otp))
        .route("/validate-otp", post(validate_otp))
        .route("/verify-device-auth", post(verify_device_auth))
}
