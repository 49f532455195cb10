use chrono::NaiveDate;
use meetingroom_core::{
    models::reservation::{ReservationId, RoomId},
    time::TimeValue,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DbRoom {
    pub room_id: RoomId,
    pub room_name: String,
}

/// Opening and closing time as stored, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbBusinessHours {
    pub start_time: TimeValue,
    pub end_time: TimeValue,
}

/// A live reservation joined with its room name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbReservation {
    pub reserve_id: ReservationId,
    pub room_id: RoomId,
    pub room_name: String,
    pub meeting_name: String,
    pub date: NaiveDate,
    pub reserver: String,
    pub start_time: TimeValue,
    pub end_time: TimeValue,
}
