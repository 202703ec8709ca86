//! # Employers Routes Module
//!
//! CRUD for `/api/employers`, plus `GET /employers/ids` for pickers.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_employer;
use get::{get_employer, list_employers, list_employer_names};
use post::create_employer;
use put::update_employer;

pub fn employers_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employers).post(create_employer))
        .route("/ids", get(list_employer_names))
        .route(
            "/{employer_id}",
            get(get_employer).put(update_employer).delete(delete_employer),
        )
}
