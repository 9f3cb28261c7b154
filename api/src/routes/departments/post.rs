use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{department, instructor};
use sea_orm::EntityTrait;
use util::state::AppState;
use validator::Validate;

use crate::response::{ApiResponse, FieldError, validation_failure};
use crate::routes::departments::common::{CreateDepartmentRequest, DepartmentResponse};

/// POST /api/departments
///
/// Create a new department.
///
/// ### Request Body
/// ```json
/// {
///   "name": "English",
///   "budget": 350000.0,
///   "start_date": "2007-09-01",
///   "instructor_id": 4
/// }
/// ```
///
/// ### Validation Rules
/// * `name`: required, max 50 characters.
/// * `budget`: must not be negative.
/// * `instructor_id`: optional; when present it must reference an existing
///   instructor.
///
/// ### Responses
///
/// - `201 Created` — the stored department with `row_version` 0.
/// - `400 Bad Request` — validation failure with field-level messages.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn create_department(
    State(app_state): State<AppState>,
    Json(req): Json<CreateDepartmentRequest>,
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

    if let Some(instructor_id) = req.instructor_id {
        match instructor::Entity::find_by_id(instructor_id).one(db).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                let field_error = FieldError::new("instructor_id", "Instructor does not exist");
                let message = field_error.message.clone();
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error_with_data(vec![field_error], message)),
                )
                    .into_response();
            }
            Err(err) => {
                tracing::error!("Failed to check instructor {instructor_id}: {err}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error("Error retrieving instructor")),
                )
                    .into_response();
            }
        }
    }

    match department::Model::create(db, &req.name, req.budget, req.start_date, req.instructor_id)
        .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                DepartmentResponse::from_department(created, None),
                "Department created successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to create department: {err}");
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
