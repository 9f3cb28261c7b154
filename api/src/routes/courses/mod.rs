//! # Courses Routes Module
//!
//! Defines and wires up routes for the `/api/courses` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (listing and details with department)
//! - `post.rs` — POST handler (create course, multipart with optional image)
//! - `put.rs` — PUT handler (edit course, multipart with optional image)
//! - `delete.rs` — DELETE handler (delete course + best-effort file cleanup)
//! - `common.rs` — form parsing, upload validation, storage helpers

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use delete::delete_course;
use get::{get_course, get_courses};
use post::create_course;
use put::edit_course;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the `/courses` route group.
///
/// Routes:
/// - `GET    /courses`      → list all courses with their departments
/// - `GET    /courses/{id}` → course details
/// - `POST   /courses`      → create (multipart form, optional image)
/// - `PUT    /courses/{id}` → edit (multipart form, optional image)
/// - `DELETE /courses/{id}` → delete course and stored image
///
/// The body limit sits above the 5 MiB teaching-material cap so oversized
/// uploads reach the handler and fail with a field-level message instead of
/// a bare 413.
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses))
        .route("/", post(create_course))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}", put(edit_course))
        .route("/{course_id}", delete(delete_course))
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
}
