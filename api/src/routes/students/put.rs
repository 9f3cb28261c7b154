use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student;
use sea_orm::EntityTrait;
use util::state::AppState;
use validator::Validate;

use crate::response::{ApiResponse, FieldError, validation_failure};
use crate::routes::students::common::{StudentRequest, StudentResponse, check_enrollment_date};

/// PUT /api/students/{student_id}
///
/// Full replace of a student's editable fields.
///
/// ### Validation Rules
/// As for create, except `enrollment_date` is required: an edit never
/// falls back to a default date.
///
/// ### Responses
///
/// - `200 OK` — the updated student.
/// - `400 Bad Request` — validation failure with field-level messages.
/// - `404 Not Found` — no student with that ID.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn edit_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<StudentRequest>,
) -> Response {
    let db = app_state.db();

    if let Err(validation_errors) = req.validate() {
        let (fields, message) = validation_failure(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error_with_data(fields, message)),
        )
            .into_response();
    }

    let enrollment_date = match check_enrollment_date(req.enrollment_date) {
        Ok(date) => date,
        Err(field_error) => {
            let message = field_error.message.clone();
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error_with_data(vec![field_error], message)),
            )
                .into_response();
        }
    };

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

    match student::Model::edit(db, student_id, &req.last_name, &req.first_name, enrollment_date)
        .await
    {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from(updated),
                "Student updated successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to update student {student_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<FieldError>>::error(
                    "Unable to save changes. Try again, and if the problem persists see your system administrator.",
                )),
            )
                .into_response()
        }
    }
}
