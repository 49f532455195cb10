use serde::{Deserialize, Serialize};

/// A room as listed on the booking screen
///
/// The id is sent as a string here, unlike in reservation records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRoom {
    pub room_id: String,
    pub room_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitDataResponse {
    pub meeting_rooms: Vec<MeetingRoom>,
    /// Business-hours grid, closing label included
    pub times: Vec<String>,
}
