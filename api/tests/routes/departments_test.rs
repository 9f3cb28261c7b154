#[cfg(test)]
mod tests {
    use crate::test_helpers::{make_app, response_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use db::models::{department, instructor};
    use db::test_utils::setup_test_db;
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn edit_request(id: i64, body: Value) -> Request<Body> {
        Request::builder()
            .uri(format!("/api/departments/{id}"))
            .method("PUT")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn edit_with_matching_token_succeeds_and_bumps_version() {
        let db = setup_test_db().await;
        let dept = department::Model::create(&db, "English", 350000.0, date(2007, 9, 1), None)
            .await
            .unwrap();
        let app = make_app(db);

        let body = json!({
            "name": "English",
            "budget": 120000.0,
            "start_date": "2007-09-01",
            "instructor_id": null,
            "row_version": 0
        });
        let response = app.oneshot(edit_request(dept.id, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["budget"], 120000.0);
        assert_eq!(json["data"]["row_version"], 1);
    }

    #[tokio::test]
    async fn stale_edit_reports_conflict_with_current_budget_and_fresh_token() {
        let db = setup_test_db().await;
        let dept = department::Model::create(&db, "Mathematics", 100000.0, date(2007, 9, 1), None)
            .await
            .unwrap();
        let app = make_app(db.clone());

        // Another client commits a budget change first.
        let winner = json!({
            "name": "Mathematics",
            "budget": 999000.0,
            "start_date": "2007-09-01",
            "instructor_id": null,
            "row_version": 0
        });
        let response = app
            .clone()
            .oneshot(edit_request(dept.id, winner))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The stale client still submits with row_version 0.
        let stale = json!({
            "name": "Mathematics",
            "budget": 100000.0,
            "start_date": "2007-09-01",
            "instructor_id": null,
            "row_version": 0
        });
        let response = app
            .clone()
            .oneshot(edit_request(dept.id, stale.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("modified by another user")
        );

        // Field-level message reports the *new* database value.
        let errors = json["data"]["errors"].as_array().unwrap();
        let budget_error = errors
            .iter()
            .find(|e| e["field"] == "budget")
            .expect("budget difference reported");
        assert_eq!(budget_error["message"], "Current value: 999000");

        // The redisplayed form model carries the current stored token.
        let current = department::Entity::find_by_id(dept.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            json["data"]["department"]["row_version"],
            current.row_version
        );

        // Resubmitting with the fresh token overrides the other edit.
        let mut retry = stale;
        retry["row_version"] = json!(current.row_version);
        let response = app.oneshot(edit_request(dept.id, retry)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn edit_of_concurrently_deleted_department_reports_deletion() {
        let db = setup_test_db().await;
        let dept = department::Model::create(&db, "Economics", 50000.0, date(2010, 1, 4), None)
            .await
            .unwrap();
        department::Model::delete(&db, dept.id).await.unwrap();
        let app = make_app(db.clone());

        let body = json!({
            "name": "Economics",
            "budget": 75000.0,
            "start_date": "2010-01-04",
            "instructor_id": null,
            "row_version": 0
        });
        let response = app.oneshot(edit_request(dept.id, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = response_json(response).await;
        assert_eq!(
            json["message"],
            "Unable to save changes. The department was deleted by another user."
        );
        // No write occurred.
        assert!(
            department::Entity::find()
                .all(&db)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn conflict_reports_changed_administrator_by_name() {
        let db = setup_test_db().await;
        let admin = instructor::Model::create(&db, "Abercrombie", "Kim", date(1995, 3, 11))
            .await
            .unwrap();
        let dept = department::Model::create(&db, "English", 350000.0, date(2007, 9, 1), None)
            .await
            .unwrap();
        let app = make_app(db);

        let winner = json!({
            "name": "English",
            "budget": 350000.0,
            "start_date": "2007-09-01",
            "instructor_id": admin.id,
            "row_version": 0
        });
        let response = app
            .clone()
            .oneshot(edit_request(dept.id, winner))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let stale = json!({
            "name": "English",
            "budget": 350000.0,
            "start_date": "2007-09-01",
            "instructor_id": null,
            "row_version": 0
        });
        let response = app.oneshot(edit_request(dept.id, stale)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = response_json(response).await;
        let errors = json["data"]["errors"].as_array().unwrap();
        let admin_error = errors
            .iter()
            .find(|e| e["field"] == "instructor_id")
            .expect("administrator difference reported");
        assert_eq!(admin_error["message"], "Current value: Kim Abercrombie");
    }

    #[tokio::test]
    async fn create_and_list_include_administrator_name() {
        let db = setup_test_db().await;
        let admin = instructor::Model::create(&db, "Kapoor", "Candace", date(2001, 1, 15))
            .await
            .unwrap();
        let app = make_app(db);

        let req = Request::builder()
            .uri("/api/departments")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "name": "Engineering",
                    "budget": 350000.0,
                    "start_date": "2007-09-01",
                    "instructor_id": admin.id
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = response_json(response).await;
        assert_eq!(json["data"]["row_version"], 0);

        let req = Request::builder()
            .uri("/api/departments")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        let json = response_json(response).await;
        let departments = json["data"].as_array().unwrap();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0]["administrator"], "Candace Kapoor");
    }

    #[tokio::test]
    async fn blank_name_is_a_field_level_validation_error() {
        let db = setup_test_db().await;
        let app = make_app(db);

        let req = Request::builder()
            .uri("/api/departments")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "name": "",
                    "budget": 1000.0,
                    "start_date": "2020-01-01",
                    "instructor_id": null
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"][0]["field"], "name");
    }

    #[tokio::test]
    async fn missing_department_is_not_found() {
        let db = setup_test_db().await;
        let app = make_app(db);

        let req = Request::builder()
            .uri("/api/departments/424242")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
