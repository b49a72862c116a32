//! Fixed name tables and small calendar lookups shared by the grid generator
//! and the calendar state.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use num_traits::FromPrimitive;

/// Weekday names indexed by days from Sunday.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Weekday index with Sunday as 0 and Saturday as 6.
pub fn weekday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday_index(weekday) as usize]
}

/// Name of the month with the given 1-based number, or an empty string for
/// anything outside 1..=12.
pub fn month_name(number: u32) -> &'static str {
    Month::from_u32(number).map_or("", |month| month.name())
}

/// Number of days in `month` (1-based) of `year`, `None` if the month does
/// not exist.
pub fn days_of_month(year: i32, month: u32) -> Option<u32> {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
}

/// Day 1 of the month `date` falls in, built from its local calendar fields.
pub fn first_of_month<D: Datelike>(date: &D) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}
