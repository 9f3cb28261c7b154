//! # Departments Routes Module
//!
//! Defines and wires up routes for the `/api/departments` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (listing and details with administrator)
//! - `post.rs` — POST handler (create department)
//! - `put.rs` — PUT handler (row-version-guarded edit)
//! - `delete.rs` — DELETE handler
//! - `common.rs` — shared request/response types and conflict reporting

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use delete::delete_department;
use get::{get_department, get_departments};
use post::create_department;
use put::edit_department;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the `/departments` route group.
///
/// Routes:
/// - `GET    /departments`      → list all departments with administrators
/// - `GET    /departments/{id}` → department details
/// - `POST   /departments`      → create a department
/// - `PUT    /departments/{id}` → edit; detects concurrent modification via
///   the row-version token
/// - `DELETE /departments/{id}` → delete a department
pub fn departments_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_departments))
        .route("/", post(create_department))
        .route("/{department_id}", get(get_department))
        .route("/{department_id}", put(edit_department))
        .route("/{department_id}", delete(delete_department))
}
