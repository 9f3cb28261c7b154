//! Aggregate statistics for `/api/stats`.

use axum::{Router, routing::get};
use get::get_enrollment_dates;
use util::state::AppState;

pub mod get;

pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/enrollment-dates", get(get_enrollment_dates))
}
