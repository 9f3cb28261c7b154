use chrono::NaiveDate;
use db::models::student::Model as Student;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::FieldError;

/// Earliest representable enrollment date (SQL Server datetime lower bound,
/// kept for parity with the stored data).
pub fn min_enrollment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1753, 1, 1).expect("valid constant date")
}

/// Latest representable enrollment date.
pub fn max_enrollment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).expect("valid constant date")
}

/// Checks the concrete-and-in-range invariant for an enrollment date,
/// returning a field-level message on violation.
pub fn check_enrollment_date(date: Option<NaiveDate>) -> Result<NaiveDate, FieldError> {
    let Some(date) = date else {
        return Err(FieldError::new(
            "enrollment_date",
            "Please enter a valid enrollment date.",
        ));
    };
    if date < min_enrollment_date() || date > max_enrollment_date() {
        return Err(FieldError::new(
            "enrollment_date",
            "Enrollment date must be between 1753 and 9999.",
        ));
    }
    Ok(date)
}

#[derive(Debug, Deserialize, Validate)]
pub struct StudentRequest {
    #[validate(length(min = 1, max = 50, message = "Last name is required (max 50 characters)"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 50, message = "First name is required (max 50 characters)"))]
    pub first_name: String,

    /// Omitted on create defaults to today; required on edit.
    pub enrollment_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            last_name: student.last_name,
            first_name: student.first_name,
            enrollment_date: student.enrollment_date,
            created_at: student.created_at.to_rfc3339(),
            updated_at: student.updated_at.to_rfc3339(),
        }
    }
}
