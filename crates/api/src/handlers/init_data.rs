use axum::{extract::State, Json};
use meetingroom_core::{
    errors::BookingError,
    models::room::{InitDataResponse, MeetingRoom},
    slots::business_hours_grid,
    time::normalize_time,
};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns every room together with the business-hours slot grid
///
/// # Endpoint
///
/// ```text
/// GET /init-data
/// ```
///
/// # Errors
///
/// * `BookingError::UnsupportedTimeFormat` - business hours are missing or
///   stored in a shape that cannot be read
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn get_init_data(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<InitDataResponse>, AppError> {
    let rooms = state.store.list_rooms().await?;

    // An empty business-hours table leaves nothing to normalize
    let hours = state.store.get_business_hours().await?.ok_or_else(|| {
        BookingError::UnsupportedTimeFormat("no business hours configured".to_string())
    })?;

    let start = normalize_time(&hours.start_time)?;
    let end = normalize_time(&hours.end_time)?;

    let response = InitDataResponse {
        meeting_rooms: rooms
            .into_iter()
            .map(|room| MeetingRoom {
                room_id: room.room_id.to_string(),
                room_name: room.room_name,
            })
            .collect(),
        times: business_hours_grid(start, end),
    };

    Ok(Json(response))
}
