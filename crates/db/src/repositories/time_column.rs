//! Reads time-of-day columns whatever SQL type they were declared with.
//!
//! Older deployments store business hours as text or as an interval from
//! midnight rather than `TIME`, so the decoder inspects the column type of
//! each value before picking a [`TimeValue`] variant.

use chrono::{Duration, NaiveTime};
use eyre::WrapErr;
use meetingroom_core::{
    errors::{BookingError, BookingResult},
    time::TimeValue,
};
use sqlx::{
    postgres::{types::PgInterval, PgRow},
    Row, TypeInfo, ValueRef,
};

/// SQL column types that can hold a time-of-day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeColumn {
    Time,
    Text,
    Interval,
}

impl TimeColumn {
    /// Maps a Postgres type name onto a supported column kind
    pub fn from_type_name(name: &str) -> BookingResult<Self> {
        match name {
            "TIME" => Ok(TimeColumn::Time),
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Ok(TimeColumn::Text),
            "INTERVAL" => Ok(TimeColumn::Interval),
            other => Err(BookingError::UnsupportedTimeFormat(format!(
                "column type {}",
                other
            ))),
        }
    }
}

/// Converts an interval counted from midnight into a duration
///
/// Month components have no fixed length and are rejected.
pub fn interval_to_duration(interval: PgInterval) -> BookingResult<Duration> {
    if interval.months != 0 {
        return Err(BookingError::UnsupportedTimeFormat(format!(
            "interval with {} months",
            interval.months
        )));
    }

    Ok(Duration::days(interval.days as i64) + Duration::microseconds(interval.microseconds))
}

/// Decodes the named column of a row into a [`TimeValue`]
pub fn decode_time(row: &PgRow, column: &str) -> BookingResult<TimeValue> {
    let raw = row
        .try_get_raw(column)
        .wrap_err_with(|| format!("Missing column {}", column))?;

    if raw.is_null() {
        return Err(BookingError::UnsupportedTimeFormat(format!(
            "column {} is NULL",
            column
        )));
    }

    let kind = TimeColumn::from_type_name(raw.type_info().name())?;

    let value = match kind {
        TimeColumn::Time => TimeValue::WallClock(
            row.try_get::<NaiveTime, _>(column)
                .wrap_err_with(|| format!("Failed to decode {} as TIME", column))?,
        ),
        TimeColumn::Text => TimeValue::Text(
            row.try_get::<String, _>(column)
                .wrap_err_with(|| format!("Failed to decode {} as text", column))?,
        ),
        TimeColumn::Interval => TimeValue::SinceMidnight(interval_to_duration(
            row.try_get::<PgInterval, _>(column)
                .wrap_err_with(|| format!("Failed to decode {} as INTERVAL", column))?,
        )?),
    };

    Ok(value)
}
