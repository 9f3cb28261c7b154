use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::department::{DepartmentEdit, Model as DepartmentModel, UpdateOutcome};
use db::models::instructor;
use sea_orm::EntityTrait;
use util::state::AppState;
use validator::Validate;

use crate::response::{ApiResponse, FieldError, validation_failure};
use crate::routes::departments::common::{
    CONFLICT_MESSAGE, DELETED_MESSAGE, DepartmentConflictResponse, DepartmentResponse,
    EditDepartmentRequest, conflict_field_errors,
};

/// PUT /api/departments/{department_id}
///
/// Edit a department under optimistic concurrency. The submission must carry
/// the `row_version` the client read with the form; the write commits only
/// if the stored token still matches. One submission is one
/// read-compare-write exchange — there is no retry loop, the user resubmits.
///
/// ### Request Body
/// ```json
/// {
///   "name": "English",
///   "budget": 350000.0,
///   "start_date": "2007-09-01",
///   "instructor_id": 4,
///   "row_version": 2
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK` — the token matched; returns the updated department with its
///   new `row_version`.
/// - `400 Bad Request` — validation failure with field-level messages.
/// - `404 Not Found` — the department never existed at this route.
/// - `409 Conflict` — another writer got there first. The payload carries
///   the submitted values with the *current* database `row_version` (so an
///   unchanged resubmission succeeds), one message per field whose database
///   value differs, and the record-level explanation. If the row was
///   deleted concurrently the message says so and nothing is written.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn edit_department(
    State(app_state): State<AppState>,
    Path(department_id): Path<i64>,
    Json(req): Json<EditDepartmentRequest>,
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

    let edit = DepartmentEdit {
        name: req.name.clone(),
        budget: req.budget,
        start_date: req.start_date,
        instructor_id: req.instructor_id,
    };

    let outcome =
        match DepartmentModel::update_with_version(db, department_id, &edit, req.row_version).await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!("Failed to update department {department_id}: {err}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<DepartmentConflictResponse>::error(
                        "Unable to save changes. Try again, and if the problem persists see your system administrator.",
                    )),
                )
                    .into_response();
            }
        };

    match outcome {
        UpdateOutcome::Updated(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                DepartmentResponse::from_department(updated, None),
                "Department updated successfully",
            )),
        )
            .into_response(),
        UpdateOutcome::Conflict(current) => {
            let current_administrator = match current.instructor_id {
                Some(id) => instructor::Entity::find_by_id(id)
                    .one(db)
                    .await
                    .unwrap_or_default(),
                None => None,
            };

            let errors = conflict_field_errors(&req, &current, current_administrator.as_ref());

            // Redisplay the client's submitted values, but overwrite the
            // token with the current one so a resubmission can succeed.
            let department = DepartmentResponse {
                id: current.id,
                name: req.name,
                budget: req.budget,
                start_date: Some(req.start_date),
                instructor_id: req.instructor_id,
                administrator: None,
                row_version: current.row_version,
                created_at: current.created_at.to_rfc3339(),
                updated_at: Utc::now().to_rfc3339(),
            };

            (
                StatusCode::CONFLICT,
                Json(ApiResponse::error_with_data(
                    DepartmentConflictResponse { department, errors },
                    CONFLICT_MESSAGE,
                )),
            )
                .into_response()
        }
        UpdateOutcome::Deleted => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<DepartmentConflictResponse>::error(
                DELETED_MESSAGE,
            )),
        )
            .into_response(),
    }
}
