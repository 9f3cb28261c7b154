use std::io;
use std::path::Path;

use axum::extract::Multipart;
use db::models::course::Model as Course;
use db::models::department::Model as Department;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::response::FieldError;

/// Extensions accepted for teaching-material images (case-insensitive).
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// Maximum accepted upload size: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 1, max = 100, message = "Title is required (max 100 characters)"))]
    pub title: String,

    #[validate(range(min = 0, max = 5, message = "Credits must be between 0 and 5"))]
    pub credits: i32,

    pub department_id: i64,
}

/// A file part lifted out of the multipart form, not yet validated.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The parsed multipart course form: scalar fields plus the optional image.
#[derive(Debug, Default)]
pub struct CourseForm {
    pub title: Option<String>,
    pub credits: Option<String>,
    pub department_id: Option<String>,
    pub teaching_material: Option<UploadedFile>,
}

/// Reads the multipart stream into a `CourseForm`. Unknown parts are
/// ignored; only one file part is accepted.
pub async fn read_course_form(mut multipart: Multipart) -> Result<CourseForm, String> {
    let mut form = CourseForm::default();
    let mut file_count = 0;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Malformed multipart body: {e}"))?
    {
        match field.name().unwrap_or("") {
            "title" => {
                form.title = Some(field.text().await.map_err(|_| "Malformed title field")?);
            }
            "credits" => {
                form.credits = Some(field.text().await.map_err(|_| "Malformed credits field")?);
            }
            "department_id" => {
                form.department_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|_| "Malformed department_id field")?,
                );
            }
            "teaching_material" => {
                if file_count > 0 {
                    return Err("Only one file may be uploaded per request".into());
                }
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| "Failed to read uploaded file")?
                    .to_vec();
                // An empty file part (no selection in the form) is treated as absent.
                if !bytes.is_empty() {
                    form.teaching_material = Some(UploadedFile { file_name, bytes });
                    file_count += 1;
                }
            }
            _ => continue,
        }
    }

    Ok(form)
}

/// Converts the raw form fields into a validated `CourseRequest`, reporting
/// every failure as a field-level message.
pub fn validate_course_form(form: &CourseForm) -> Result<CourseRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = form.title.clone().unwrap_or_default();
    let credits = match form.credits.as_deref().unwrap_or("").parse::<i32>() {
        Ok(credits) => credits,
        Err(_) => {
            errors.push(FieldError::new("credits", "Credits must be a whole number"));
            0
        }
    };
    let department_id = match form.department_id.as_deref().unwrap_or("").parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            errors.push(FieldError::new("department_id", "Department is required"));
            0
        }
    };

    let request = CourseRequest {
        title,
        credits,
        department_id,
    };
    if let Err(validation_errors) = request.validate() {
        errors.extend(
            common::collect_field_errors(&validation_errors)
                .into_iter()
                .map(|(field, message)| FieldError { field, message }),
        );
    }

    if errors.is_empty() {
        Ok(request)
    } else {
        Err(errors)
    }
}

/// Validates the uploaded image's extension and size, returning the
/// normalized (lowercased) extension.
pub fn validate_teaching_material(upload: &UploadedFile) -> Result<String, FieldError> {
    let extension = Path::new(&upload.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(FieldError::new(
            "teaching_material",
            "Please upload a valid image file (jpg, jpeg, png, gif, bmp).",
        ));
    }

    if upload.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(FieldError::new(
            "teaching_material",
            "File size must be less than 5MB.",
        ));
    }

    Ok(extension)
}

/// Writes the validated upload under the teaching-material directory and
/// returns the web-relative path to record on the course row.
pub fn store_teaching_material(
    course_id: i64,
    extension: &str,
    bytes: &[u8],
) -> io::Result<String> {
    let dir = util::paths::ensure_dir(util::paths::teaching_materials_dir())?;
    let token = Uuid::new_v4();
    let filename =
        util::paths::teaching_material_filename(course_id, &token.to_string(), extension);
    std::fs::write(dir.join(&filename), bytes)?;
    Ok(util::paths::teaching_material_web_path(&filename))
}

/// Best-effort removal of a stored teaching-material file. A missing file is
/// not an error; any other failure is logged and swallowed so cleanup never
/// blocks the record operation.
pub fn remove_stored_material(web_path: &str) {
    let Some(disk_path) = util::paths::resolve_web_path(web_path) else {
        tracing::warn!("Refusing to delete teaching material outside storage: {web_path}");
        return;
    };
    match std::fs::remove_file(&disk_path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(
                "Failed to delete teaching material {}: {err}",
                disk_path.display()
            );
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub credits: i32,
    pub department_id: i64,
    pub department_name: Option<String>,
    pub teaching_material_path: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl CourseResponse {
    pub fn from_course(course: Course, department: Option<Department>) -> Self {
        Self {
            id: course.id,
            title: course.title,
            credits: course.credits,
            department_id: course.department_id,
            department_name: department.map(|d| d.name),
            teaching_material_path: course.teaching_material_path,
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}
