use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::courses::common::remove_stored_material;

/// DELETE /api/courses/{course_id}
///
/// Confirmed deletion of a course. The stored teaching-material image, if
/// any, is removed best-effort: a missing or undeletable file never blocks
/// deletion of the record.
///
/// ### Responses
///
/// - `200 OK` — deleted.
/// - `404 Not Found` — no course with that ID.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    let course = match course::Entity::find_by_id(course_id).one(db).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("Failed to fetch course {course_id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving course")),
            )
                .into_response();
        }
    };

    if let Some(web_path) = course.teaching_material_path.as_deref() {
        remove_stored_material(web_path);
    }

    match course::Model::delete(db, course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Course deleted successfully")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to delete course {course_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    "Unable to delete the course. Try again, and if the problem persists see your system administrator.",
                )),
            )
                .into_response()
        }
    }
}
