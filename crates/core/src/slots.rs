//! # Slot Generation
//!
//! Turns a time-of-day range into the 30-minute labels the booking grid is
//! drawn with.
//!
//! Two variants exist and are kept apart on purpose. The business-hours grid
//! includes its closing label so the UI can draw the last row boundary, while
//! a reservation's occupied slots stop before its end time.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::time::format_label;

/// Length of one bookable slot in minutes
pub const SLOT_MINUTES: i64 = 30;

/// Whether the end of a range produces a label of its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotBoundary {
    /// Emit labels while `current <= end`
    IncludeEnd,
    /// Emit labels while `current < end`
    ExcludeEnd,
}

impl SlotBoundary {
    fn admits(self, current: NaiveDateTime, end: NaiveDateTime) -> bool {
        match self {
            SlotBoundary::IncludeEnd => current <= end,
            SlotBoundary::ExcludeEnd => current < end,
        }
    }
}

/// Lazily walks a range in 30-minute steps
///
/// Both ends are pinned to the same reference date so stepping past `23:30`
/// moves onto the next day instead of wrapping back to midnight.
pub fn slot_starts(
    start: NaiveTime,
    end: NaiveTime,
    boundary: SlotBoundary,
) -> impl Iterator<Item = NaiveTime> {
    let reference = NaiveDate::default();
    let end = reference.and_time(end);
    let step = Duration::minutes(SLOT_MINUTES);

    std::iter::successors(Some(reference.and_time(start)), move |current| {
        Some(*current + step)
    })
    .take_while(move |current| boundary.admits(*current, end))
    .map(|current| current.time())
}

/// Materializes the labels for a range
pub fn generate_slots(start: NaiveTime, end: NaiveTime, boundary: SlotBoundary) -> Vec<String> {
    slot_starts(start, end, boundary).map(format_label).collect()
}

/// Full-day grid for the business hours, closing label included
pub fn business_hours_grid(start: NaiveTime, end: NaiveTime) -> Vec<String> {
    generate_slots(start, end, SlotBoundary::IncludeEnd)
}

/// Slots a reservation occupies, its end label excluded
pub fn occupied_slots(start: NaiveTime, end: NaiveTime) -> Vec<String> {
    generate_slots(start, end, SlotBoundary::ExcludeEnd)
}
