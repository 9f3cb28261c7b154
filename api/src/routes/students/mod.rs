//! # Students Routes Module
//!
//! Defines and wires up routes for the `/api/students` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (paginated listing, details with enrollments)
//! - `post.rs` — POST handlers (create student)
//! - `put.rs` — PUT handlers (edit student)
//! - `delete.rs` — DELETE handlers (delete student)
//! - `common.rs` — shared request/response types and enrollment-date checks

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use delete::delete_student;
use get::{get_student, get_students};
use post::create_student;
use put::edit_student;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the `/students` route group.
///
/// Routes:
/// - `GET    /students`      → paginated, sortable, filterable listing
/// - `GET    /students/{id}` → details including enrollments and courses
/// - `POST   /students`      → create a new student
/// - `PUT    /students/{id}` → edit a student
/// - `DELETE /students/{id}` → delete a student
pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students))
        .route("/", post(create_student))
        .route("/{student_id}", get(get_student))
        .route("/{student_id}", put(edit_student))
        .route("/{student_id}", delete(delete_student))
}
