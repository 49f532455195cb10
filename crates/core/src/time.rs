//! # Time Normalization
//!
//! Stored times reach us in one of three shapes depending on how the column
//! was declared: a native `TIME`, a textual `"HH:MM:SS"` value, or an
//! `INTERVAL` counted from midnight. Everything downstream works on a single
//! canonical [`NaiveTime`].

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::errors::{BookingError, BookingResult};

/// Format accepted for textual time values
pub const TEXT_TIME_FORMAT: &str = "%H:%M:%S";

/// Format used for every time-of-day label sent to clients
pub const LABEL_FORMAT: &str = "%H:%M";

/// Format used for calendar dates sent to clients
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A time-of-day in any of the representations we accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeValue {
    /// Native wall-clock time
    WallClock(NaiveTime),
    /// Text encoded as `HH:MM:SS`
    Text(String),
    /// Offset from midnight
    SinceMidnight(Duration),
}

impl From<NaiveTime> for TimeValue {
    fn from(time: NaiveTime) -> Self {
        TimeValue::WallClock(time)
    }
}

impl From<Duration> for TimeValue {
    fn from(duration: Duration) -> Self {
        TimeValue::SinceMidnight(duration)
    }
}

impl From<String> for TimeValue {
    fn from(text: String) -> Self {
        TimeValue::Text(text)
    }
}

impl From<&str> for TimeValue {
    fn from(text: &str) -> Self {
        TimeValue::Text(text.to_string())
    }
}

/// Converts any [`TimeValue`] into a canonical time-of-day
///
/// Wall-clock values pass through untouched. Durations keep whole hours and
/// minutes only; leftover seconds are dropped.
///
/// # Errors
///
/// * `BookingError::UnsupportedTimeFormat` - text that is not `HH:MM:SS`, or a
///   duration that is negative or reaches past the end of the day
pub fn normalize_time(value: &TimeValue) -> BookingResult<NaiveTime> {
    match value {
        TimeValue::WallClock(time) => Ok(*time),
        TimeValue::Text(text) => NaiveTime::parse_from_str(text, TEXT_TIME_FORMAT)
            .map_err(|_| BookingError::UnsupportedTimeFormat(text.clone())),
        TimeValue::SinceMidnight(duration) => {
            let total_seconds = duration.num_seconds();
            if total_seconds < 0 {
                return Err(BookingError::UnsupportedTimeFormat(format!(
                    "negative duration {}s",
                    total_seconds
                )));
            }

            let hours = total_seconds / 3600;
            let minutes = (total_seconds % 3600) / 60;

            u32::try_from(hours)
                .ok()
                .and_then(|h| NaiveTime::from_hms_opt(h, minutes as u32, 0))
                .ok_or_else(|| {
                    BookingError::UnsupportedTimeFormat(format!(
                        "duration {}s is outside a single day",
                        total_seconds
                    ))
                })
        }
    }
}

/// Formats a time-of-day as a zero-padded 24-hour `HH:MM` label
pub fn format_label(time: NaiveTime) -> String {
    time.format(LABEL_FORMAT).to_string()
}

/// Formats a calendar date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
