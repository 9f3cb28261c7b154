//! Liveness route group for `/api/health`.

use axum::{Router, routing::get};
use get::health;
use util::state::AppState;

pub mod get;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
