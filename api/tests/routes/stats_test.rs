#[cfg(test)]
mod tests {
    use crate::test_helpers::{make_app, response_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use db::models::{instructor, student};
    use db::test_utils::setup_test_db;
    use tower::ServiceExt;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn enrollment_dates_are_grouped_and_counted() {
        let db = setup_test_db().await;
        student::Model::create(&db, "Alexander", "Carson", date(2020, 1, 1))
            .await
            .unwrap();
        student::Model::create(&db, "Alonzo", "Meredith", date(2020, 1, 1))
            .await
            .unwrap();
        student::Model::create(&db, "Anand", "Arturo", date(2021, 6, 15))
            .await
            .unwrap();
        let app = make_app(db);

        let req = Request::builder()
            .uri("/api/stats/enrollment-dates")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let groups = json["data"].as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["enrollment_date"], "2020-01-01");
        assert_eq!(groups[0]["student_count"], 2);
        assert_eq!(groups[1]["enrollment_date"], "2021-06-15");
        assert_eq!(groups[1]["student_count"], 1);
    }

    #[tokio::test]
    async fn instructors_are_listed_by_surname_with_full_names() {
        let db = setup_test_db().await;
        instructor::Model::create(&db, "Zheng", "Roger", date(2004, 2, 12))
            .await
            .unwrap();
        instructor::Model::create(&db, "Abercrombie", "Kim", date(1995, 3, 11))
            .await
            .unwrap();
        let app = make_app(db);

        let req = Request::builder()
            .uri("/api/instructors")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let instructors = json["data"].as_array().unwrap();
        assert_eq!(instructors.len(), 2);
        assert_eq!(instructors[0]["last_name"], "Abercrombie");
        assert_eq!(instructors[0]["full_name"], "Kim Abercrombie");
        assert_eq!(instructors[1]["last_name"], "Zheng");
    }
}
