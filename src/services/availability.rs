//! Interval overlap engine.
//!
//! Everything here operates on half-open day ranges `[start, end)`: the
//! check-in day is occupied, the checkout day is not, so a checkout and a
//! new check-in on the same day never conflict (same-day turnover).
//!
//! These functions are total and pure. They never allocate, never panic,
//! and never reject their input: a zero-length or inverted range simply
//! overlaps nothing, and a range with an invalid bound compares false
//! everywhere, which reports as "no overlap". Whether that last fallback
//! is acceptable is the caller's call; validate with
//! [`DayStamp::is_valid`] before trusting the answer for malformed input.

use crate::models::{DayStamp, Reservation};

/// True iff the half-open day ranges `[a_start, a_end)` and
/// `[b_start, b_end)` share at least one day.
///
/// Written in positive form, `a_start < b_end && b_start < a_end`, which
/// is equivalent to `!(a_end <= b_start || a_start >= b_end)` for valid
/// bounds and degrades to `false` when any bound is invalid.
pub fn ranges_overlap(
    a_start: DayStamp,
    a_end: DayStamp,
    b_start: DayStamp,
    b_end: DayStamp,
) -> bool {
    a_start.is_before(b_end) && b_start.is_before(a_end)
}

/// True iff none of `reservations` overlaps the candidate stay
/// `[from, to)`. An empty list is trivially available.
///
/// This is the single availability predicate in the crate. Booking
/// validation, search filtering, and calendar rendering all go through it
/// so a venue can never be "bookable" in one view and "unavailable" in
/// another.
pub fn is_range_available(reservations: &[Reservation], from: DayStamp, to: DayStamp) -> bool {
    reservations
        .iter()
        .all(|r| !ranges_overlap(from, to, r.date_from, r.date_to))
}
