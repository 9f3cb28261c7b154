use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use db::models::instructor;
use serde::Serialize;
use util::state::AppState;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct InstructorResponse {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub full_name: String,
    pub hire_date: NaiveDate,
}

/// GET /api/instructors
///
/// List all instructors ordered by surname. Used to populate the
/// administrator selection when creating or editing a department.
///
/// ### Responses
///
/// - `200 OK` — all instructors.
/// - `500 Internal Server Error` — database failure.
pub async fn get_instructors(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    match instructor::Model::get_all_ordered(db).await {
        Ok(instructors) => {
            let instructors: Vec<InstructorResponse> = instructors
                .into_iter()
                .map(|instructor| InstructorResponse {
                    id: instructor.id,
                    full_name: instructor.full_name(),
                    last_name: instructor.last_name,
                    first_name: instructor.first_name,
                    hire_date: instructor.hire_date,
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    instructors,
                    "Instructors retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Failed to list instructors: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving instructors")),
            )
                .into_response()
        }
    }
}
