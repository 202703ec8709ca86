use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use util::state::AppState;

use crate::error::ApiError;
use crate::response::ApiResponse;

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint for uptime checks and load balancer probes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Pings the database and reports whether the API can serve requests.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
/// - `500 Internal Server Error` when the database is unreachable
async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.db().ping().await?;
    Ok(Json(ApiResponse::success("OK", "Health check passed")))
}
