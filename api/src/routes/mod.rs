//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by entity (students, courses, departments,
//! instructors) plus the health and statistics groups. Each group lives in
//! its own module with per-verb handler files.

use axum::Router;
use util::state::AppState;

use crate::routes::{
    courses::courses_routes, departments::departments_routes, health::health_routes,
    instructors::instructors_routes, stats::stats_routes, students::students_routes,
};

pub mod courses;
pub mod departments;
pub mod health;
pub mod instructors;
pub mod stats;
pub mod students;

/// Builds the complete application router for all HTTP endpoints.
///
/// # Route Structure:
/// - `/health` → liveness check.
/// - `/students` → paginated listing, details, create, edit, delete.
/// - `/courses` → listing, details, create/edit with teaching-material
///   upload, delete.
/// - `/departments` → listing, details, create, optimistic-concurrency
///   edit, delete.
/// - `/instructors` → administrator dropdown listing.
/// - `/stats` → enrollment-date statistics.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/students", students_routes())
        .nest("/courses", courses_routes())
        .nest("/departments", departments_routes())
        .nest("/instructors", instructors_routes())
        .nest("/stats", stats_routes())
        .with_state(app_state)
}
