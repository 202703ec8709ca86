//! # attendance Routes Module
//!
//! Check-in / check-out for the trainee identified by the `student-id` header.

mod common;
mod get;
mod post;

use axum::{Router, routing::get};
use util::state::AppState;

pub use get::list_attendance;
pub use post::record_attendance;

/// - `POST /attendance` → `record_attendance`
/// - `GET /attendance` → `list_attendance`
pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/", get(list_attendance).post(record_attendance))
}
