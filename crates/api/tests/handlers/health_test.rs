use axum::http::StatusCode;

use crate::test_utils::TestContext;
use meetingroom_api::routes::health::{HealthResponse, VersionResponse};

#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().into_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<HealthResponse>().status, "ok");
}

#[tokio::test]
async fn test_version_reports_api_crate() {
    let server = TestContext::new().into_server();

    let response = server.get("/version").await;

    let body = response.json::<VersionResponse>();
    assert_eq!(body.name, "meetingroom-api");
    assert!(!body.version.is_empty());
}
