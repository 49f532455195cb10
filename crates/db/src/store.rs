//! The seam between HTTP handlers and the database.
//!
//! Handlers only see [`ReservationStore`]; production wires in
//! [`PgReservationStore`] and tests swap in the mock from [`crate::mock`].

use async_trait::async_trait;
use meetingroom_core::{
    errors::BookingResult,
    models::reservation::{CreateReservationRequest, ReservationId},
};

use crate::models::{DbBusinessHours, DbReservation, DbRoom};
use crate::repositories::{reservation, room};
use crate::DbPool;

#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// All meeting rooms
    async fn list_rooms(&self) -> BookingResult<Vec<DbRoom>>;

    /// The single business-hours record, `None` when the table is empty
    async fn get_business_hours(&self) -> BookingResult<Option<DbBusinessHours>>;

    /// Live reservations on `date`, joined with room names
    async fn get_reservations_by_date(&self, date: String) -> BookingResult<Vec<DbReservation>>;

    /// Inserts a reservation and returns its id
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> BookingResult<ReservationId>;

    /// Soft-deletes a reservation and returns the affected row count
    ///
    /// Takes any 64-bit id; ids no reservation can have affect zero rows.
    async fn soft_delete_reservation(&self, id: i64) -> BookingResult<u64>;
}

/// [`ReservationStore`] backed by a Postgres pool
#[derive(Debug, Clone)]
pub struct PgReservationStore {
    pool: DbPool,
}

impl PgReservationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    async fn list_rooms(&self) -> BookingResult<Vec<DbRoom>> {
        room::list_rooms(&self.pool).await
    }

    async fn get_business_hours(&self) -> BookingResult<Option<DbBusinessHours>> {
        room::get_business_hours(&self.pool).await
    }

    async fn get_reservations_by_date(&self, date: String) -> BookingResult<Vec<DbReservation>> {
        reservation::get_reservations_by_date(&self.pool, &date).await
    }

    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> BookingResult<ReservationId> {
        reservation::create_reservation(&self.pool, &request).await
    }

    async fn soft_delete_reservation(&self, id: i64) -> BookingResult<u64> {
        reservation::soft_delete_reservation(&self.pool, id).await
    }
}
