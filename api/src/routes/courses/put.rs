use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course, department};
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::{ApiResponse, FieldError};
use crate::routes::courses::common::{
    CourseResponse, read_course_form, remove_stored_material, store_teaching_material,
    validate_course_form, validate_teaching_material,
};

/// PUT /api/courses/{course_id}
///
/// Full replace of a course's editable fields from a multipart form. When a
/// new teaching-material image is supplied it replaces the stored one; a
/// rejected upload leaves the prior stored path untouched.
///
/// ### Responses
///
/// - `200 OK` — the updated course.
/// - `400 Bad Request` — field-level validation or upload failure.
/// - `404 Not Found` — no course with that ID.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn edit_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    multipart: Multipart,
) -> Response {
    let db = app_state.db();

    let form = match read_course_form(multipart).await {
        Ok(form) => form,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Vec<FieldError>>::error(message)),
            )
                .into_response();
        }
    };

    let request = match validate_course_form(&form) {
        Ok(request) => request,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error_with_data(
                    errors,
                    "Course validation failed",
                )),
            )
                .into_response();
        }
    };

    let existing = match course::Entity::find_by_id(course_id).one(db).await {
        Ok(Some(existing)) => existing,
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

    match department::Entity::find_by_id(request.department_id).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let field_error = FieldError::new("department_id", "Department does not exist");
            let message = field_error.message.clone();
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error_with_data(vec![field_error], message)),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("Failed to check department {}: {err}", request.department_id);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving department")),
            )
                .into_response();
        }
    }

    // A new image must be fully validated and stored before the row is
    // touched, so a rejected upload cannot disturb the prior stored path.
    let new_path = match &form.teaching_material {
        Some(upload) => {
            let extension = match validate_teaching_material(upload) {
                Ok(extension) => extension,
                Err(field_error) => {
                    let message = field_error.message.clone();
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::error_with_data(vec![field_error], message)),
                    )
                        .into_response();
                }
            };
            match store_teaching_material(course_id, &extension, &upload.bytes) {
                Ok(web_path) => Some(web_path),
                Err(err) => {
                    tracing::warn!("Failed to store teaching material: {err}");
                    let field_error =
                        FieldError::new("teaching_material", format!("Error uploading file: {err}"));
                    let message = field_error.message.clone();
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::error_with_data(vec![field_error], message)),
                    )
                        .into_response();
                }
            }
        }
        None => None,
    };

    match course::Model::edit(
        db,
        course_id,
        &request.title,
        request.credits,
        request.department_id,
        new_path.clone(),
    )
    .await
    {
        Ok(updated) => {
            // The old image is orphaned once the row points at the new one.
            if new_path.is_some() {
                if let Some(old_path) = existing.teaching_material_path.as_deref() {
                    remove_stored_material(old_path);
                }
            }
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    CourseResponse::from_course(updated, None),
                    "Course updated successfully",
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Failed to update course {course_id}: {err}");
            if let Some(web_path) = new_path.as_deref() {
                remove_stored_material(web_path);
            }
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
