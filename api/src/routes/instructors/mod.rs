//! Instructor listing for `/api/instructors` — the administrator dropdown
//! on department forms is populated from here.

use axum::{Router, routing::get};
use get::get_instructors;
use util::state::AppState;

pub mod get;

pub fn instructors_routes() -> Router<AppState> {
    Router::new().route("/", get(get_instructors))
}
