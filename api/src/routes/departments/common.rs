use chrono::NaiveDate;
use db::models::department::Model as Department;
use db::models::instructor::Model as Instructor;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::FieldError;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 50, message = "Name is required (max 50 characters)"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: f64,

    pub start_date: NaiveDate,

    pub instructor_id: Option<i64>,
}

/// The edit submission additionally carries the row-version token the client
/// read with the form; it is compared, never assigned, on the way back in.
#[derive(Debug, Deserialize, Validate)]
pub struct EditDepartmentRequest {
    #[validate(length(min = 1, max = 50, message = "Name is required (max 50 characters)"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub budget: f64,

    pub start_date: NaiveDate,

    pub instructor_id: Option<i64>,

    pub row_version: i64,
}

#[derive(Debug, Default, Serialize)]
pub struct DepartmentResponse {
    pub id: i64,
    pub name: String,
    pub budget: f64,
    pub start_date: Option<NaiveDate>,
    pub instructor_id: Option<i64>,
    pub administrator: Option<String>,
    pub row_version: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl DepartmentResponse {
    pub fn from_department(department: Department, administrator: Option<Instructor>) -> Self {
        Self {
            id: department.id,
            name: department.name,
            budget: department.budget,
            start_date: Some(department.start_date),
            instructor_id: department.instructor_id,
            administrator: administrator.map(|i| i.full_name()),
            row_version: department.row_version,
            created_at: department.created_at.to_rfc3339(),
            updated_at: department.updated_at.to_rfc3339(),
        }
    }
}

/// The redisplayed edit form after a concurrency conflict: the client's own
/// submitted values carrying the *current* database row-version, plus one
/// message per field whose database value differs.
#[derive(Debug, Default, Serialize)]
pub struct DepartmentConflictResponse {
    pub department: DepartmentResponse,
    pub errors: Vec<FieldError>,
}

/// Record-level explanation attached to every conflict response.
pub const CONFLICT_MESSAGE: &str = "The record you attempted to edit was modified by another \
     user after you got the original values. The edit operation was canceled and the current \
     values in the database are shown. If you still want to edit this record, submit again to \
     override them.";

pub const DELETED_MESSAGE: &str =
    "Unable to save changes. The department was deleted by another user.";

/// Compares the submitted values against the freshly loaded database row and
/// produces one field-level message per difference, reporting the current
/// database value. The administrator difference reports the instructor's
/// name rather than the raw id.
pub fn conflict_field_errors(
    submitted: &EditDepartmentRequest,
    current: &Department,
    current_administrator: Option<&Instructor>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if current.name != submitted.name {
        errors.push(FieldError::new(
            "name",
            format!("Current value: {}", current.name),
        ));
    }
    if current.budget != submitted.budget {
        errors.push(FieldError::new(
            "budget",
            format!("Current value: {}", current.budget),
        ));
    }
    if current.start_date != submitted.start_date {
        errors.push(FieldError::new(
            "start_date",
            format!("Current value: {}", current.start_date),
        ));
    }
    if current.instructor_id != submitted.instructor_id {
        let name = current_administrator
            .map(|i| i.full_name())
            .unwrap_or_default();
        errors.push(FieldError::new(
            "instructor_id",
            format!("Current value: {name}"),
        ));
    }

    errors
}
