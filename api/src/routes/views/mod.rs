//! # Views Routes Module
//!
//! Read-only aggregates for the supervisor dashboard and the trainee app.
//!
//! - `GET /dashboard` → every student with employer, latest attendance and mood
//! - `GET /trainee-profile` → profile of the `student-id` header's student
//! - `GET /employee-summary` → past attendance, remarks and moods
//! - `GET /management` → every student with employer, supervisor and latest OTP

use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::{dashboard, employee_summary, management, trainee_profile};

pub fn views_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/trainee-profile", get(trainee_profile))
        .route("/employee-summary", get(employee_summary))
        .route("/management", get(management))
}
