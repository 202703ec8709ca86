pub mod auth;
pub mod error;
pub mod response;
pub mod routes;
pub mod ws;

use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;
use util::state::AppState;

use crate::auth::middleware::log_request;
use crate::routes::routes;
use crate::ws::ws_routes;

/// The full application: `/api` plus `/ws`, request logging and permissive CORS.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes(app_state.clone()))
        .nest("/ws", ws_routes(app_state))
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
}
