//! # Students Routes Module
//!
//! Wires up the `/api/students` endpoint group.
//!
//! ## Structure
//! - `common.rs`: request payload shared by create and update
//! - `get.rs`: list and fetch
//! - `post.rs`: create
//! - `put.rs`: wholesale update
//! - `delete.rs`: delete

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_student;
use get::{get_student, list_students};
use post::create_student;
use put::update_student;

/// - `GET /students` → `list_students`
/// - `POST /students` → `create_student`
/// - `GET /students/{student_id}` → `get_student`
/// - `PUT /students/{student_id}` → `update_student`
/// - `DELETE /students/{student_id}` → `delete_student`
pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{student_id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
