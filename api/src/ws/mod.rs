//! WebSocket entry point for `/ws/...`.
//!
//! - `/ws` and `/ws/location` → live location feed (see [`location`])

use axum::{Router, routing::get};
use util::state::AppState;

pub mod location;

pub fn ws_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(location::location_handler))
        .route("/location", get(location::location_handler))
        .with_state(app_state)
}
