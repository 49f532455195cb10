use axum::{body::to_bytes, http::StatusCode};
use meetingroom_api::middleware::error_handling::{map_error, AppError};
use meetingroom_core::errors::BookingError;

#[tokio::test]
async fn test_unsupported_time_format_is_server_error() {
    let error = BookingError::UnsupportedTimeFormat("9 o'clock".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Unsupported time format: 9 o'clock");
}

#[tokio::test]
async fn test_database_error_is_server_error() {
    let error = BookingError::Database(eyre::eyre!("connection refused"));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_eyre_report_becomes_database_error() {
    let error: AppError = eyre::eyre!("pool timed out").into();

    assert!(matches!(error.0, BookingError::Database(_)));
}
