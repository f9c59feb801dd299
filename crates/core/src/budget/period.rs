//! Calendar-month arithmetic for budget periods.

use chrono::{Datelike, NaiveDate};

/// Returns true for months 1 through 12.
#[must_use]
pub const fn is_valid_month(month: i32) -> bool {
    matches!(month, 1..=12)
}

/// Half-open date range `[first day, first day of next month)` for a period.
///
/// Returns `None` when the pair does not name a representable calendar month.
#[must_use]
pub fn month_bounds(month: i32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    if !is_valid_month(month) {
        return None;
    }
    let month = u32::try_from(month).ok()?;

    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((start, end))
}

/// The `(month, year)` period a date falls in.
#[must_use]
pub fn period_of(date: NaiveDate) -> (i32, i32) {
    (date.month().cast_signed(), date.year())
}
