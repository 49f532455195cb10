//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP responses. Every failure this service can hit
//! is a server-side one, so all of them surface as a 500 with a JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use meetingroom_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use meetingroom_api::middleware::error_handling::AppError;
/// use meetingroom_core::time::{normalize_time, TimeValue};
///
/// async fn handler() -> Result<Json<String>, AppError> {
///     let time = normalize_time(&TimeValue::Text("09:00:00".into()))?;
///     Ok(Json(time.to_string()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BookingError::UnsupportedTimeFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!("Request failed: {:?}", self.0);

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Lets handlers use `?` on `BookingResult`
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Lets handlers use `?` on `eyre::Result`, treating the failure as a
/// database error
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
