use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::student;
use util::state::AppState;
use validator::Validate;

use crate::response::{ApiResponse, FieldError, validation_failure};
use crate::routes::students::common::{StudentRequest, StudentResponse, check_enrollment_date};

/// POST /api/students
///
/// Create a new student.
///
/// ### Request Body
/// ```json
/// {
///   "last_name": "Alexander",
///   "first_name": "Carson",
///   "enrollment_date": "2024-09-01"
/// }
/// ```
///
/// ### Validation Rules
/// * `last_name`, `first_name`: required, max 50 characters.
/// * `enrollment_date`: optional (defaults to today), must lie between
///   1753-01-01 and 9999-12-31 — a sentinel minimum date is never stored.
///
/// ### Responses
///
/// - `201 Created` — the stored student.
/// - `400 Bad Request` — validation failure with field-level messages.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn create_student(
    State(app_state): State<AppState>,
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

    // Create defaults the date to today, matching the blank create form.
    let enrollment_date = match check_enrollment_date(
        req.enrollment_date.or_else(|| Some(Utc::now().date_naive())),
    ) {
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

    match student::Model::create(db, &req.last_name, &req.first_name, enrollment_date).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                StudentResponse::from(created),
                "Student created successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to create student: {err}");
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
