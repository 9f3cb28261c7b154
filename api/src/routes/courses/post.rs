use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course, department};
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::{ApiResponse, FieldError};
use crate::routes::courses::common::{
    CourseResponse, read_course_form, store_teaching_material, validate_course_form,
    validate_teaching_material,
};

/// POST /api/courses
///
/// Create a new course from a multipart form.
///
/// ### Request Body (Multipart Form Data)
/// - `title` (string, required)
/// - `credits` (integer, required, 0–5)
/// - `department_id` (integer, required, must reference an existing
///   department)
/// - `teaching_material` (file, optional): image upload; jpg/jpeg/png/gif/
///   bmp, at most 5 MiB.
///
/// The upload is validated before any write. A rejected upload commits
/// nothing — no file on disk, no course row.
///
/// ### Responses
///
/// - `201 Created` — the stored course, including the recorded
///   `/Uploads/TeachingMaterials/...` path when an image was supplied.
/// - `400 Bad Request` — field-level validation or upload failure.
/// - `500 Internal Server Error` — persistence failure with the generic
///   retry message.
pub async fn create_course(State(app_state): State<AppState>, multipart: Multipart) -> Response {
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

    // Validate the upload up front so nothing is committed on rejection.
    let upload = match &form.teaching_material {
        Some(upload) => match validate_teaching_material(upload) {
            Ok(extension) => Some((extension, upload.bytes.as_slice())),
            Err(field_error) => {
                let message = field_error.message.clone();
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error_with_data(vec![field_error], message)),
                )
                    .into_response();
            }
        },
        None => None,
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

    let created =
        match course::Model::create(db, &request.title, request.credits, request.department_id, None)
            .await
        {
            Ok(created) => created,
            Err(err) => {
                tracing::error!("Failed to create course: {err}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Vec<FieldError>>::error(
                        "Unable to save changes. Try again, and if the problem persists see your system administrator.",
                    )),
                )
                    .into_response();
            }
        };

    // The stored filename embeds the course id, so the file is written after
    // the insert; a failed write rolls the insert back.
    let course = if let Some((extension, bytes)) = upload {
        let web_path = match store_teaching_material(created.id, &extension, bytes) {
            Ok(web_path) => web_path,
            Err(err) => {
                tracing::warn!("Failed to store teaching material: {err}");
                let _ = course::Model::delete(db, created.id).await;
                let field_error =
                    FieldError::new("teaching_material", format!("Error uploading file: {err}"));
                let message = field_error.message.clone();
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error_with_data(vec![field_error], message)),
                )
                    .into_response();
            }
        };

        match course::Model::edit(
            db,
            created.id,
            &request.title,
            request.credits,
            request.department_id,
            Some(web_path.clone()),
        )
        .await
        {
            Ok(updated) => updated,
            Err(err) => {
                tracing::error!("Failed to record teaching material path: {err}");
                crate::routes::courses::common::remove_stored_material(&web_path);
                let _ = course::Model::delete(db, created.id).await;
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Vec<FieldError>>::error(
                        "Unable to save changes. Try again, and if the problem persists see your system administrator.",
                    )),
                )
                    .into_response();
            }
        }
    } else {
        created
    };

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            CourseResponse::from_course(course, None),
            "Course created successfully",
        )),
    )
        .into_response()
}
