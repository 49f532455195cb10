use async_trait::async_trait;
use meetingroom_core::{
    errors::BookingResult,
    models::reservation::{CreateReservationRequest, ReservationId},
};
use mockall::mock;

use crate::models::{DbBusinessHours, DbReservation, DbRoom};
use crate::store::ReservationStore;

// Mock store for handler tests
mock! {
    pub Store {}

    #[async_trait]
    impl ReservationStore for Store {
        async fn list_rooms(&self) -> BookingResult<Vec<DbRoom>>;

        async fn get_business_hours(&self) -> BookingResult<Option<DbBusinessHours>>;

        async fn get_reservations_by_date(
            &self,
            date: String,
        ) -> BookingResult<Vec<DbReservation>>;

        async fn create_reservation(
            &self,
            request: CreateReservationRequest,
        ) -> BookingResult<ReservationId>;

        async fn soft_delete_reservation(&self, id: i64) -> BookingResult<u64>;
    }
}
