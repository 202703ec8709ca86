//! # Supervisors Routes Module
//!
//! CRUD for `/api/supervisors`. Email addresses are unique across supervisors.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_supervisor;
use get::{get_supervisor, list_supervisors, list_supervisor_names};
use post::create_supervisor;
use put::update_supervisor;

/// - `GET /supervisors` → `list_supervisors`
/// - `POST /supervisors` → `create_supervisor`
/// - `GET /supervisors/ids` → `list_supervisor_names`
/// - `GET /supervisors/{supervisor_id}` → `get_supervisor`
/// - `PUT /supervisors/{supervisor_id}` → `update_supervisor`
/// - `DELETE /supervisors/{supervisor_id}` → `delete_supervisor`
pub fn supervisors_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_supervisors).post(create_supervisor))
        .route("/ids", get(list_supervisor_names))
        .route(
            "/{supervisor_id}",
            get(get_supervisor)
                .put(update_supervisor)
                .delete(delete_supervisor),
        )
}
