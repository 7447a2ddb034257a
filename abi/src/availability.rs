use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::Serialize;

use crate::{Booking, FacilityId, TimeOfDay};

pub const OPENING_MINUTE: u16 = 8 * 60;
pub const CLOSING_MINUTE: u16 = 20 * 60;
pub const SLOT_MINUTES: u16 = 30;
pub const SLOTS_PER_DAY: usize = ((CLOSING_MINUTE - OPENING_MINUTE) / SLOT_MINUTES) as usize;

/// One half-open `[start, end)` interval of the daily grid, tagged with
/// whether it can still be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub available: bool,
}

/// The fixed daily grid: contiguous 30-minute intervals tiling
/// `[08:00, 20:00)`.
pub fn slot_grid() -> Vec<(TimeOfDay, TimeOfDay)> {
    (0..SLOTS_PER_DAY as u16)
        .map(|i| {
            let start = OPENING_MINUTE + i * SLOT_MINUTES;
            (
                TimeOfDay::from_minutes_unchecked(start),
                TimeOfDay::from_minutes_unchecked(start + SLOT_MINUTES),
            )
        })
        .collect()
}

/// Tag every grid slot for the given facility and date.
///
/// A slot is unavailable when an active booking overlaps it (open-interval
/// comparison) or when the slot already lies in the past relative to `now`.
/// The two conditions are independent; either alone masks the slot.
pub fn compute_availability(
    facility_id: FacilityId,
    date: NaiveDate,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> Vec<Slot> {
    let today = now.date_naive();
    let minute_now = (now.time().hour() * 60 + now.time().minute()) as u16;

    slot_grid()
        .into_iter()
        .map(|(start, end)| {
            let booked = bookings.iter().any(|b| b.occupies(facility_id, date, start, end));
            let past = date < today || (date == today && end.minutes() <= minute_now);
            Slot {
                start,
                end,
                available: !booked && !past,
            }
        })
        .collect()
}
