#[cfg(test)]
mod tests {
    use crate::test_helpers::{make_app, response_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::test_utils::setup_test_db;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_ok() {
        let db = setup_test_db().await;
        let app = make_app(db);

        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["status"], "ok");
    }
}
