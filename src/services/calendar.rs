//! Month calendar expansion.
//!
//! Projects a (month, reservations) pair into a grid of classified cells
//! for a booking calendar. Same interval math as the overlap engine,
//! applied at day granularity: a reservation occupies every day of
//! `[date_from, date_to)`, checkout day excluded.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::api::{CalendarCell, MonthGrid};
use crate::models::{DayStamp, Reservation};

/// Collect every day occupied by some reservation. Reservations with an
/// invalid bound contribute nothing, consistent with the overlap
/// predicate treating them as occupying no days.
fn booked_days(reservations: &[Reservation]) -> HashSet<NaiveDate> {
    let mut days = HashSet::new();
    for reservation in reservations {
        let (Some(from), Some(to)) = (reservation.date_from.date(), reservation.date_to.date())
        else {
            continue;
        };
        let mut cursor = from;
        while cursor < to {
            days.insert(cursor);
            let Some(next) = cursor.succ_opt() else {
                break;
            };
            cursor = next;
        }
    }
    days
}

/// Expand one month into grid cells, Monday-first.
///
/// Leading cells before the 1st are blank placeholders so the first row
/// lines up; trailing blanks pad the final row to a full week. Cells
/// outside the month carry no classification. An out-of-range
/// `(year, month)` pair yields an empty grid.
///
/// `today` drives the `is_today`/`is_past` flags; pass
/// [`DayStamp::today`] for live rendering or a fixed stamp in tests.
pub fn month_grid(
    year: i32,
    month: u32,
    reservations: &[Reservation],
    today: DayStamp,
) -> MonthGrid {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthGrid {
            year,
            month,
            cells: Vec::new(),
        };
    };

    let booked = booked_days(reservations);
    let days_in_month = days_in_month(first);

    // chrono's num_days_from_monday already gives Monday = 0; upstream
    // sources counting from Sunday need the remap this performs for us.
    let leading = first.weekday().num_days_from_monday() as usize;

    let mut cells = vec![CalendarCell::BLANK; leading];
    for day in 1..=days_in_month {
        // Every day of a valid month is itself valid.
        let date = first.with_day(day).unwrap_or(first);
        let stamp = DayStamp::from_date(date);
        cells.push(CalendarCell {
            day: Some(day),
            booked: booked.contains(&date),
            is_today: today.date() == Some(date),
            is_past: stamp.is_before(today),
        });
    }
    while cells.len() % 7 != 0 {
        cells.push(CalendarCell::BLANK);
    }

    MonthGrid { year, month, cells }
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next_month {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}
