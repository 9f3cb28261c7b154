use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::department;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ApiResponse;

/// DELETE /api/departments/{department_id}
///
/// Confirmed deletion of a department. Courses owned by the department are
/// removed by the database's cascade rule.
///
/// ### Responses
///
/// - `200 OK` — deleted.
/// - `404 Not Found` — no department with that ID.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn delete_department(
    State(app_state): State<AppState>,
    Path(department_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    match department::Entity::find_by_id(department_id).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Department not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("Failed to fetch department {department_id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving department")),
            )
                .into_response();
        }
    }

    match department::Model::delete(db, department_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Department deleted successfully")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to delete department {department_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    "Unable to delete the department. Try again, and if the problem persists see your system administrator.",
                )),
            )
                .into_response()
        }
    }
}
