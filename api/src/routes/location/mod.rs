//! # Location Routes Module
//!
//! `POST /api/location` feeds the live location broadcast served on
//! `/ws/location`. Updates are held in memory only.

use axum::{Router, routing::post};
use util::state::AppState;

pub mod post;

pub fn location_routes() -> Router<AppState> {
    Router::new().route("/", post(post::update_location))
}
