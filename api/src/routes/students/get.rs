use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student;
use db::pagination::paginate;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::students::common::StudentResponse;

/// Students are listed ten to a page.
const PAGE_SIZE: u64 = 10;

#[derive(Debug, Deserialize)]
pub struct StudentListReq {
    /// One of "", "name_desc", "date", "date_desc".
    pub sort_order: Option<String>,
    /// The filter currently in effect, round-tripped by the client while paging.
    pub current_filter: Option<String>,
    /// A newly submitted search; resets paging to the first page.
    pub search_string: Option<String>,
    pub page: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<StudentResponse>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub sort_order: String,
    pub current_filter: String,
}

/// GET /api/students
///
/// Paginated, sortable, filterable student listing.
///
/// ### Query Parameters
/// - `sort_order`: "" (surname ascending, default), `name_desc`, `date`,
///   `date_desc`.
/// - `search_string`: substring matched against last *or* first name; when
///   present, paging resets to page 1.
/// - `current_filter`: the previously applied search, used when
///   `search_string` is absent so paging keeps the filter.
/// - `page`: 1-based page number; values below 1 behave as 1.
///
/// ### Responses
///
/// - `200 OK` — one page of students plus paging metadata and the echoed
///   sort/filter state.
/// - `500 Internal Server Error` — database failure.
pub async fn get_students(
    State(app_state): State<AppState>,
    Query(params): Query<StudentListReq>,
) -> Response {
    let db = app_state.db();

    // A fresh search resets to the first page; otherwise the round-tripped
    // filter stays in effect for the requested page.
    let (filter, page) = match params.search_string {
        Some(search) => (search, 1),
        None => (
            params.current_filter.unwrap_or_default(),
            params.page.unwrap_or(1),
        ),
    };

    let mut query = student::Entity::find();
    if !filter.is_empty() {
        query = query.filter(
            Condition::any()
                .add(student::Column::LastName.contains(&filter))
                .add(student::Column::FirstName.contains(&filter)),
        );
    }

    let sort_order = params.sort_order.unwrap_or_default();
    query = match sort_order.as_str() {
        "name_desc" => query.order_by_desc(student::Column::LastName),
        "date" => query.order_by_asc(student::Column::EnrollmentDate),
        "date_desc" => query.order_by_desc(student::Column::EnrollmentDate),
        _ => query.order_by_asc(student::Column::LastName),
    };
    // Stable tiebreaker so page boundaries are deterministic.
    query = query.order_by_asc(student::Column::Id);

    match paginate(db, query, page, PAGE_SIZE).await {
        Ok(result) => {
            let response = StudentListResponse {
                page: result.page_index,
                page_size: result.page_size,
                total_items: result.total_items,
                total_pages: result.total_pages,
                has_previous_page: result.has_previous_page(),
                has_next_page: result.has_next_page(),
                students: result.items.into_iter().map(Into::into).collect(),
                sort_order,
                current_filter: filter,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Students retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Failed to list students: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving students")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub grade: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StudentDetailsResponse {
    #[serde(flatten)]
    pub student: StudentResponse,
    pub enrollments: Vec<EnrollmentResponse>,
}

/// GET /api/students/{student_id}
///
/// Retrieve one student with their enrollments and the title of each
/// enrolled course. The related rows are fetched explicitly up front.
///
/// ### Responses
///
/// - `200 OK` — student details.
/// - `404 Not Found` — no student with that ID.
/// - `500 Internal Server Error` — database failure.
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    match student::Model::get_with_enrollments(db, student_id).await {
        Ok(Some((student, enrollments))) => {
            let enrollments = enrollments
                .into_iter()
                .map(|(enrollment, course)| EnrollmentResponse {
                    id: enrollment.id,
                    course_id: enrollment.course_id,
                    course_title: course.map(|c| c.title).unwrap_or_default(),
                    grade: enrollment.grade.map(|g| g.to_string()),
                })
                .collect();
            let response = StudentDetailsResponse {
                student: student.into(),
                enrollments,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Student retrieved successfully",
                )),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Student not found")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to fetch student {student_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving student")),
            )
                .into_response()
        }
    }
}
