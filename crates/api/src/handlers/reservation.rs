use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use meetingroom_core::{
    errors::BookingResult,
    models::reservation::{
        CreateReservationRequest, GetReservationsQuery, ReservationResponse,
    },
    slots::occupied_slots,
    time::{format_date, format_label, normalize_time},
};
use meetingroom_db::models::DbReservation;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{middleware::error_handling::AppError, ApiState};

/// Shapes a stored reservation into its client form
///
/// Start and end are normalized independently, and the occupied slots stop
/// before the end time.
pub fn to_reservation_response(row: DbReservation) -> BookingResult<ReservationResponse> {
    let start = normalize_time(&row.start_time)?;
    let end = normalize_time(&row.end_time)?;

    Ok(ReservationResponse {
        reservation_id: row.reserve_id,
        room_id: row.room_id,
        room_name: row.room_name,
        meeting_name: row.meeting_name,
        date: format_date(row.date),
        reserver: row.reserver,
        start_time: format_label(start),
        end_time: format_label(end),
        time: occupied_slots(start, end),
    })
}

/// Lists the live reservations for one day
///
/// # Endpoint
///
/// ```text
/// GET /reservations/get?date=2024-05-01
/// ```
///
/// The date is handed to the database unchecked; a malformed value fails
/// there and comes back as a 500.
#[axum::debug_handler]
pub async fn get_reservations(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<GetReservationsQuery>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let rows = state.store.get_reservations_by_date(query.date).await?;

    let reservations = rows
        .into_iter()
        .map(to_reservation_response)
        .collect::<BookingResult<Vec<_>>>()?;

    Ok(Json(reservations))
}

/// Books a room
///
/// The body is forwarded to the store as received. Missing fields and values
/// the database cannot convert fail there and come back as a 500. No overlap
/// check is made against existing reservations.
#[axum::debug_handler]
pub async fn add_reservation(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<StatusCode, AppError> {
    let room_id = payload.room_id.clone();
    let id = state.store.create_reservation(payload).await?;

    info!("Reservation {} created for room {:?}", id, room_id);
    Ok(StatusCode::OK)
}

/// Soft-deletes a reservation
///
/// Unknown ids succeed without changing anything, including integers no
/// reservation could ever have.
#[axum::debug_handler]
pub async fn delete_reservation(
    State(state): State<Arc<ApiState>>,
    Path(reserve_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let affected = state.store.soft_delete_reservation(reserve_id).await?;

    if affected == 0 {
        debug!("No reservation with id {} to delete", reserve_id);
    } else {
        info!("Reservation {} deleted", reserve_id);
    }
    Ok(StatusCode::OK)
}
