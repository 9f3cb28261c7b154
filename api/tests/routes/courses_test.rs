#[cfg(test)]
mod tests {
    use crate::test_helpers::{make_app, response_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use db::models::{course, department};
    use db::test_utils::setup_test_db;
    use sea_orm::{DatabaseConnection, EntityTrait};
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    const BOUNDARY: &str = "registrar-test-boundary";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Points the upload storage root at a fresh temp directory for the
    /// duration of one test. Tests touching storage run serially because the
    /// config is process-global.
    fn setup_storage() -> tempfile::TempDir {
        crate::test_helpers::init_test_env();
        let dir = tempfile::tempdir().unwrap();
        AppConfig::set_upload_storage_root(dir.path().to_str().unwrap());
        dir
    }

    fn text_part(body: &mut Vec<u8>, name: &str, value: &str) {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    fn file_part(body: &mut Vec<u8>, filename: &str, bytes: &[u8]) {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"teaching_material\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    fn course_form(
        title: &str,
        credits: &str,
        department_id: i64,
        file: Option<(&str, &[u8])>,
    ) -> Vec<u8> {
        let mut body = Vec::new();
        text_part(&mut body, "title", title);
        text_part(&mut body, "credits", credits);
        text_part(&mut body, "department_id", &department_id.to_string());
        if let Some((filename, bytes)) = file {
            file_part(&mut body, filename, bytes);
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(uri: &str, method: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method(method)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn seed_department(db: &DatabaseConnection) -> department::Model {
        department::Model::create(db, "Mathematics", 100000.0, date(2007, 9, 1), None)
            .await
            .unwrap()
    }

    fn stored_files(root: &std::path::Path) -> Vec<std::path::PathBuf> {
        let dir = root.join("Uploads").join("TeachingMaterials");
        match std::fs::read_dir(dir) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }

    #[tokio::test]
    #[serial]
    async fn executable_upload_is_rejected_and_nothing_is_written() {
        let storage = setup_storage();
        let db = setup_test_db().await;
        let dept = seed_department(&db).await;
        let app = make_app(db.clone());

        let body = course_form("Calculus", "4", dept.id, Some(("payload.exe", b"MZ")));
        let response = app
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"][0]["field"], "teaching_material");
        assert!(
            json["data"][0]["message"]
                .as_str()
                .unwrap()
                .contains("valid image file")
        );

        assert!(course::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(stored_files(storage.path()).is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn six_mib_upload_is_rejected() {
        let storage = setup_storage();
        let db = setup_test_db().await;
        let dept = seed_department(&db).await;
        let app = make_app(db.clone());

        let oversized = vec![0u8; 6 * 1024 * 1024];
        let body = course_form("Calculus", "4", dept.id, Some(("big.png", &oversized)));
        let response = app
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert!(json["data"][0]["message"].as_str().unwrap().contains("5MB"));
        assert!(course::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(stored_files(storage.path()).is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn four_mib_png_is_stored_under_the_fixed_prefix() {
        let storage = setup_storage();
        let db = setup_test_db().await;
        let dept = seed_department(&db).await;
        let app = make_app(db.clone());

        let image = vec![0u8; 4 * 1024 * 1024];
        let body = course_form("Calculus", "4", dept.id, Some(("notes.png", &image)));
        let response = app
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = response_json(response).await;
        let id = json["data"]["id"].as_i64().unwrap();
        let path = json["data"]["teaching_material_path"].as_str().unwrap();
        assert!(path.starts_with(&format!("/Uploads/TeachingMaterials/course_{id}_")));
        assert!(path.ends_with(".png"));

        let files = stored_files(storage.path());
        assert_eq!(files.len(), 1);
        assert_eq!(std::fs::metadata(&files[0]).unwrap().len(), image.len() as u64);

        let stored = course::Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.teaching_material_path.as_deref(), Some(path));
    }

    #[tokio::test]
    #[serial]
    async fn deleting_a_course_with_missing_file_still_deletes_the_record() {
        let storage = setup_storage();
        let db = setup_test_db().await;
        let dept = seed_department(&db).await;
        let app = make_app(db.clone());

        let body = course_form("Calculus", "4", dept.id, Some(("notes.png", &[1u8; 64])));
        let response = app
            .clone()
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = response_json(response).await;
        let id = json["data"]["id"].as_i64().unwrap();

        // The stored file vanishes out from under the record.
        for file in stored_files(storage.path()) {
            std::fs::remove_file(file).unwrap();
        }

        let req = Request::builder()
            .uri(format!("/api/courses/{id}"))
            .method("DELETE")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(course::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn deleting_a_course_removes_its_stored_file() {
        let storage = setup_storage();
        let db = setup_test_db().await;
        let dept = seed_department(&db).await;
        let app = make_app(db.clone());

        let body = course_form("Calculus", "4", dept.id, Some(("notes.png", &[1u8; 64])));
        let response = app
            .clone()
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        let json = response_json(response).await;
        let id = json["data"]["id"].as_i64().unwrap();
        assert_eq!(stored_files(storage.path()).len(), 1);

        let req = Request::builder()
            .uri(format!("/api/courses/{id}"))
            .method("DELETE")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(stored_files(storage.path()).is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn replacing_the_image_deletes_the_previous_file() {
        let storage = setup_storage();
        let db = setup_test_db().await;
        let dept = seed_department(&db).await;
        let app = make_app(db.clone());

        let body = course_form("Calculus", "4", dept.id, Some(("v1.png", &[1u8; 32])));
        let response = app
            .clone()
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        let json = response_json(response).await;
        let id = json["data"]["id"].as_i64().unwrap();
        let first_path = json["data"]["teaching_material_path"]
            .as_str()
            .unwrap()
            .to_string();

        let body = course_form("Calculus", "4", dept.id, Some(("v2.jpg", &[2u8; 32])));
        let response = app
            .oneshot(multipart_request(
                &format!("/api/courses/{id}"),
                "PUT",
                body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let second_path = json["data"]["teaching_material_path"].as_str().unwrap();
        assert_ne!(second_path, first_path);
        assert!(second_path.ends_with(".jpg"));

        let files = stored_files(storage.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].to_str().unwrap().ends_with(".jpg"));
    }

    #[tokio::test]
    #[serial]
    async fn rejected_replacement_leaves_the_prior_path_untouched() {
        let _storage = setup_storage();
        let db = setup_test_db().await;
        let dept = seed_department(&db).await;
        let app = make_app(db.clone());

        let body = course_form("Calculus", "4", dept.id, Some(("v1.png", &[1u8; 32])));
        let response = app
            .clone()
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        let json = response_json(response).await;
        let id = json["data"]["id"].as_i64().unwrap();
        let first_path = json["data"]["teaching_material_path"]
            .as_str()
            .unwrap()
            .to_string();

        let body = course_form("Calculus", "4", dept.id, Some(("v2.exe", &[2u8; 32])));
        let response = app
            .oneshot(multipart_request(
                &format!("/api/courses/{id}"),
                "PUT",
                body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let stored = course::Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.teaching_material_path.as_deref(), Some(first_path.as_str()));
    }

    #[tokio::test]
    #[serial]
    async fn unknown_department_is_a_field_level_error() {
        let _storage = setup_storage();
        let db = setup_test_db().await;
        let app = make_app(db.clone());

        let body = course_form("Calculus", "4", 424242, None);
        let response = app
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["data"][0]["field"], "department_id");
        assert!(course::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn create_without_image_and_list_with_department_name() {
        let _storage = setup_storage();
        let db = setup_test_db().await;
        let dept = seed_department(&db).await;
        let app = make_app(db);

        let body = course_form("Trigonometry", "3", dept.id, None);
        let response = app
            .clone()
            .oneshot(multipart_request("/api/courses", "POST", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = response_json(response).await;
        assert!(json["data"]["teaching_material_path"].is_null());

        let req = Request::builder()
            .uri("/api/courses")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        let json = response_json(response).await;
        let courses = json["data"].as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0]["title"], "Trigonometry");
        assert_eq!(courses[0]["department_name"], "Mathematics");
    }
}
