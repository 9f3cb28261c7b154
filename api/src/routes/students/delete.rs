use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ApiResponse;

/// DELETE /api/students/{student_id}
///
/// Confirmed deletion of a student. Enrollments are removed by the
/// database's cascade rule.
///
/// ### Responses
///
/// - `200 OK` — deleted.
/// - `404 Not Found` — no student with that ID.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    match student::Entity::find_by_id(student_id).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Student not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("Failed to fetch student {student_id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving student")),
            )
                .into_response();
        }
    }

    match student::Model::delete(db, student_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Student deleted successfully")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to delete student {student_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    "Unable to delete the student. Try again, and if the problem persists see your system administrator.",
                )),
            )
                .into_response()
        }
    }
}
