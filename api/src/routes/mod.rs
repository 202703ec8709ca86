//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, one module per resource. The OTP endpoints
//! and the read-only views sit at the `/api` root, everything else is nested.
//!
//! Route groups include:
//! - `/health` → liveness probe
//! - `/generate-otp`, `/validate-otp`, `/verify-device-auth` → OTP and device pairing
//! - `/attendance` → check-in / check-out and history
//! - `/students`, `/employers`, `/supervisors`, `/moods` → CRUD
//! - `/dashboard`, `/management`, `/trainee-profile`, `/employee-summary` → aggregates
//! - `/location` → live location updates

use crate::routes::{
    attendance::attendance_routes, auth::auth_routes, employers::employers_routes,
    health::health_routes, location::location_routes, moods::moods_routes,
    students::students_routes, supervisors::supervisors_routes, views::views_routes,
};
use axum::Router;
use util::state::AppState;

pub mod attendance;
pub mod auth;
pub mod employers;
pub mod health;
pub mod location;
pub mod moods;
pub mod students;
pub mod supervisors;
pub mod views;

/// Builds the router for every HTTP endpoint and binds it to `app_state`.
///
/// The result is meant to be nested under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(auth_routes())
        .nest("/attendance", attendance_routes())
        .nest("/students", students_routes())
        .nest("/employers", employers_routes())
        .nest("/supervisors", supervisors_routes())
        .nest("/moods", moods_routes())
        .nest("/location", location_routes())
        .merge(views_routes())
        .with_state(app_state)
}
