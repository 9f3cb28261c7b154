use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::courses::common::CourseResponse;

/// GET /api/courses
///
/// List all courses, each with its owning department's name, ordered by
/// title.
///
/// ### Responses
///
/// - `200 OK` — all courses.
/// - `500 Internal Server Error` — database failure.
pub async fn get_courses(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    match course::Model::list_with_departments(db).await {
        Ok(courses) => {
            let courses: Vec<CourseResponse> = courses
                .into_iter()
                .map(|(course, department)| CourseResponse::from_course(course, department))
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    courses,
                    "Courses retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Failed to list courses: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving courses")),
            )
                .into_response()
        }
    }
}

/// GET /api/courses/{course_id}
///
/// Retrieve one course with its department.
///
/// ### Responses
///
/// - `200 OK` — course details.
/// - `404 Not Found` — no course with that ID.
/// - `500 Internal Server Error` — database failure.
pub async fn get_course(State(app_state): State<AppState>, Path(course_id): Path<i64>) -> Response {
    let db = app_state.db();

    match course::Model::get_with_department(db, course_id).await {
        Ok(Some((course, department))) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from_course(course, department),
                "Course retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course not found")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to fetch course {course_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving course")),
            )
                .into_response()
        }
    }
}
