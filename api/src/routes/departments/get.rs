use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::department;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::departments::common::DepartmentResponse;

/// GET /api/departments
///
/// List all departments, each with its administrator's name, ordered by
/// department name.
///
/// ### Responses
///
/// - `200 OK` — all departments.
/// - `500 Internal Server Error` — database failure.
pub async fn get_departments(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    match department::Model::list_with_administrators(db).await {
        Ok(departments) => {
            let departments: Vec<DepartmentResponse> = departments
                .into_iter()
                .map(|(department, administrator)| {
                    DepartmentResponse::from_department(department, administrator)
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    departments,
                    "Departments retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Failed to list departments: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving departments")),
            )
                .into_response()
        }
    }
}

/// GET /api/departments/{department_id}
///
/// Retrieve one department with its administrator. The returned
/// `row_version` is the token an edit submission must carry back.
///
/// ### Responses
///
/// - `200 OK` — department details.
/// - `404 Not Found` — no department with that ID.
/// - `500 Internal Server Error` — database failure.
pub async fn get_department(
    State(app_state): State<AppState>,
    Path(department_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    match department::Model::get_with_administrator(db, department_id).await {
        Ok(Some((department, administrator))) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                DepartmentResponse::from_department(department, administrator),
                "Department retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Department not found")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to fetch department {department_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving department")),
            )
                .into_response()
        }
    }
}
