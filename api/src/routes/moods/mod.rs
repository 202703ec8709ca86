//! # Moods Routes Module
//!
//! The mood log under `/api/moods`. Entries are stamped with server time.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_mood;
use get::{get_mood, list_moods};
use post::create_mood;
use put::update_mood;

pub fn moods_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_moods).post(create_mood))
        .route(
            "/{mood_id}",
            get(get_mood).put(update_mood).delete(delete_mood),
        )
}
