use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use db::models::student;
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryOrder, QuerySelect};
use serde::Serialize;
use util::state::AppState;

use crate::response::ApiResponse;

/// Students grouped by the date they enrolled.
#[derive(Debug, Serialize, FromQueryResult)]
pub struct EnrollmentDateGroup {
    pub enrollment_date: NaiveDate,
    pub student_count: i64,
}

/// GET /api/stats/enrollment-dates
///
/// Count students per enrollment date, in date order. The grouping happens
/// in the store; only the aggregate rows travel back.
///
/// ### Responses
///
/// - `200 OK` — one row per distinct enrollment date.
/// - `500 Internal Server Error` — database failure.
pub async fn get_enrollment_dates(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    let result = student::Entity::find()
        .select_only()
        .column(student::Column::EnrollmentDate)
        .column_as(student::Column::Id.count(), "student_count")
        .group_by(student::Column::EnrollmentDate)
        .order_by_asc(student::Column::EnrollmentDate)
        .into_model::<EnrollmentDateGroup>()
        .all(db)
        .await;

    match result {
        Ok(groups) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                groups,
                "Enrollment statistics retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to aggregate enrollment dates: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    "Error retrieving enrollment statistics",
                )),
            )
                .into_response()
        }
    }
}
