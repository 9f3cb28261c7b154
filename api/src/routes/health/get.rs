use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub project: String,
}

/// GET /api/health
///
/// Reports that the service is up. Carries no entity data.
pub async fn health() -> impl IntoResponse {
    let data = HealthResponse {
        status: "ok".to_string(),
        project: util::config::project_name(),
    };
    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Service is healthy")),
    )
}
