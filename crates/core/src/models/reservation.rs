use serde::{Deserialize, Serialize};
use std::fmt;

pub type ReservationId = i32;
pub type RoomId = i32;

/// Room id as posted by clients
///
/// `/init-data` hands room ids out as strings, so both a JSON number and a
/// string are accepted. The value reaches the database as text and is cast
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomIdInput {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RoomIdInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomIdInput::Number(number) => write!(f, "{}", number),
            RoomIdInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<RoomId> for RoomIdInput {
    fn from(room_id: RoomId) -> Self {
        RoomIdInput::Number(room_id.into())
    }
}

impl From<&str> for RoomIdInput {
    fn from(text: &str) -> Self {
        RoomIdInput::Text(text.to_string())
    }
}

/// Body of `POST /reservations/add`
///
/// Every field is optional and nothing is checked here. Date and times stay
/// as text and are cast by the database, and absent fields are stored as
/// NULL, which the table constraints reject.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    #[serde(rename = "roomId")]
    pub room_id: Option<RoomIdInput>,
    #[serde(rename = "meetingName")]
    pub meeting_name: Option<String>,
    pub date: Option<String>,
    pub reserver: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetReservationsQuery {
    /// Expected as `YYYY-MM-DD`
    pub date: String,
}

/// One reservation as returned by `GET /reservations/get`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationResponse {
    #[serde(rename = "reservationId")]
    pub reservation_id: ReservationId,
    #[serde(rename = "roomId")]
    pub room_id: RoomId,
    #[serde(rename = "roomName")]
    pub room_name: String,
    #[serde(rename = "meetingName")]
    pub meeting_name: String,
    pub date: String,
    pub reserver: String,
    pub start_time: String,
    pub end_time: String,
    /// Slots the meeting occupies, end label excluded
    pub time: Vec<String>,
}
