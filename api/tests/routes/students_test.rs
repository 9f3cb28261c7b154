#[cfg(test)]
mod tests {
    use crate::test_helpers::{make_app, response_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use db::models::{course, department, enrollment, student};
    use db::test_utils::setup_test_db;
    use sea_orm::{DatabaseConnection, EntityTrait};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seed_students(db: &DatabaseConnection, count: usize) {
        for i in 0..count {
            student::Model::create(
                db,
                &format!("Surname{i:02}"),
                &format!("First{i:02}"),
                date(2020, 1, 1),
            )
            .await
            .unwrap();
        }
    }

    async fn get_page(app: &axum::Router, uri: &str) -> Value {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response_json(response).await
    }

    #[tokio::test]
    async fn listing_paginates_in_pages_of_ten() {
        let db = setup_test_db().await;
        seed_students(&db, 25).await;
        let app = make_app(db);

        let mut seen = Vec::new();
        for page in 1..=3 {
            let json = get_page(&app, &format!("/api/students?page={page}")).await;
            let data = &json["data"];
            assert_eq!(data["total_items"], 25);
            assert_eq!(data["total_pages"], 3);
            assert_eq!(data["has_previous_page"], page > 1);
            assert_eq!(data["has_next_page"], page < 3);

            let students = data["students"].as_array().unwrap();
            assert_eq!(students.len(), if page < 3 { 10 } else { 5 });
            seen.extend(
                students
                    .iter()
                    .map(|s| s["last_name"].as_str().unwrap().to_string()),
            );
        }

        // Concatenating all pages in order reproduces the ordered source.
        let expected: Vec<String> = (0..25).map(|i| format!("Surname{i:02}")).collect();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn page_zero_behaves_as_page_one() {
        let db = setup_test_db().await;
        seed_students(&db, 12).await;
        let app = make_app(db);

        let first = get_page(&app, "/api/students?page=1").await;
        let zero = get_page(&app, "/api/students?page=0").await;
        let negative = get_page(&app, "/api/students?page=-2").await;

        assert_eq!(zero["data"]["students"], first["data"]["students"]);
        assert_eq!(negative["data"]["students"], first["data"]["students"]);
        assert_eq!(zero["data"]["page"], 1);
        assert_eq!(zero["data"]["has_previous_page"], false);
    }

    #[tokio::test]
    async fn search_matches_either_name_field_and_resets_paging() {
        let db = setup_test_db().await;
        seed_students(&db, 15).await;
        student::Model::create(&db, "Zeta", "Alonso", date(2021, 5, 1))
            .await
            .unwrap();
        student::Model::create(&db, "Alonso", "Maria", date(2021, 5, 1))
            .await
            .unwrap();
        let app = make_app(db);

        // Substring match applies to last OR first name.
        let json = get_page(&app, "/api/students?search_string=Alonso&page=9").await;
        let data = &json["data"];
        assert_eq!(data["total_items"], 2);
        // A fresh search resets to page 1 regardless of the requested page.
        assert_eq!(data["page"], 1);
        assert_eq!(data["current_filter"], "Alonso");

        // Paging with current_filter keeps the filter in effect.
        let json = get_page(&app, "/api/students?current_filter=Alonso&page=1").await;
        assert_eq!(json["data"]["total_items"], 2);
    }

    #[tokio::test]
    async fn sort_order_variants_reorder_the_listing() {
        let db = setup_test_db().await;
        student::Model::create(&db, "Adams", "Amy", date(2022, 3, 1))
            .await
            .unwrap();
        student::Model::create(&db, "Baker", "Ben", date(2020, 3, 1))
            .await
            .unwrap();
        student::Model::create(&db, "Cruz", "Cal", date(2021, 3, 1))
            .await
            .unwrap();
        let app = make_app(db);

        let names = |json: &Value| -> Vec<String> {
            json["data"]["students"]
                .as_array()
                .unwrap()
                .iter()
                .map(|s| s["last_name"].as_str().unwrap().to_string())
                .collect()
        };

        let json = get_page(&app, "/api/students").await;
        assert_eq!(names(&json), vec!["Adams", "Baker", "Cruz"]);

        let json = get_page(&app, "/api/students?sort_order=name_desc").await;
        assert_eq!(names(&json), vec!["Cruz", "Baker", "Adams"]);

        let json = get_page(&app, "/api/students?sort_order=date").await;
        assert_eq!(names(&json), vec!["Baker", "Cruz", "Adams"]);

        let json = get_page(&app, "/api/students?sort_order=date_desc").await;
        assert_eq!(names(&json), vec!["Adams", "Cruz", "Baker"]);
    }

    #[tokio::test]
    async fn create_student_persists_the_record() {
        let db = setup_test_db().await;
        let app = make_app(db.clone());

        let req = Request::builder()
            .uri("/api/students")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "last_name": "Alexander",
                    "first_name": "Carson",
                    "enrollment_date": "2024-09-01"
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["enrollment_date"], "2024-09-01");

        let stored = student::Entity::find().all(&db).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].last_name, "Alexander");
    }

    #[tokio::test]
    async fn create_without_date_defaults_to_today() {
        let db = setup_test_db().await;
        let app = make_app(db.clone());

        let req = Request::builder()
            .uri("/api/students")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({ "last_name": "Li", "first_name": "Yan" }).to_string(),
            ))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let stored = student::Entity::find().all(&db).await.unwrap();
        assert_eq!(
            stored[0].enrollment_date,
            chrono::Utc::now().date_naive()
        );
    }

    #[tokio::test]
    async fn out_of_range_date_yields_field_level_error() {
        let db = setup_test_db().await;
        let app = make_app(db.clone());

        let req = Request::builder()
            .uri("/api/students")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "last_name": "Old",
                    "first_name": "Very",
                    "enrollment_date": "1700-01-01"
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"][0]["field"], "enrollment_date");
        assert!(
            json["data"][0]["message"]
                .as_str()
                .unwrap()
                .contains("between 1753 and 9999")
        );
        assert!(student::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn details_include_enrollments_with_course_titles() {
        let db = setup_test_db().await;
        let dept = department::Model::create(&db, "Mathematics", 100000.0, date(2007, 9, 1), None)
            .await
            .unwrap();
        let course = course::Model::create(&db, "Calculus", 4, dept.id, None)
            .await
            .unwrap();
        let stu = student::Model::create(&db, "Alexander", "Carson", date(2024, 9, 1))
            .await
            .unwrap();
        enrollment::Model::create(&db, stu.id, course.id, Some(enrollment::Grade::A))
            .await
            .unwrap();
        let app = make_app(db);

        let json = get_page(&app, &format!("/api/students/{}", stu.id)).await;
        assert_eq!(json["data"]["last_name"], "Alexander");
        let enrollments = json["data"]["enrollments"].as_array().unwrap();
        assert_eq!(enrollments.len(), 1);
        assert_eq!(enrollments[0]["course_title"], "Calculus");
        assert_eq!(enrollments[0]["grade"], "A");
    }

    #[tokio::test]
    async fn missing_student_is_not_found() {
        let db = setup_test_db().await;
        let app = make_app(db);

        let req = Request::builder()
            .uri("/api/students/9999")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn edit_replaces_editable_fields() {
        let db = setup_test_db().await;
        let stu = student::Model::create(&db, "Alexander", "Carson", date(2024, 9, 1))
            .await
            .unwrap();
        let app = make_app(db.clone());

        let req = Request::builder()
            .uri(format!("/api/students/{}", stu.id))
            .method("PUT")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "last_name": "Alonzo",
                    "first_name": "Meredith",
                    "enrollment_date": "2023-01-15"
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let stored = student::Entity::find_by_id(stu.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.last_name, "Alonzo");
        assert_eq!(stored.enrollment_date, date(2023, 1, 15));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let db = setup_test_db().await;
        let stu = student::Model::create(&db, "Gone", "Soon", date(2024, 9, 1))
            .await
            .unwrap();
        let app = make_app(db.clone());

        let req = Request::builder()
            .uri(format!("/api/students/{}", stu.id))
            .method("DELETE")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            student::Entity::find_by_id(stu.id)
                .one(&db)
                .await
                .unwrap()
                .is_none()
        );
    }
}
