use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Serialize;
use std::slice::Chunks;

use crate::names::{days_of_month, first_of_month, weekday_index, weekday_name};

/// Number of cells in a month grid: six rows of one week each.
pub const GRID_LEN: usize = 42;
pub const WEEK_LEN: usize = 7;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarItem {
    /// Day of month as printed in the cell.
    pub date: u32,
    pub full_date: NaiveDate,
    /// Whether the cell belongs to the displayed month.
    pub active: bool,
    pub selected: bool,
    pub name: &'static str,
}

impl CalendarItem {
    pub fn new(full_date: NaiveDate, active: bool, selected: bool) -> Self {
        CalendarItem {
            date: full_date.day(),
            full_date,
            active,
            selected,
            name: weekday_name(full_date.weekday()),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.full_date.weekday()
    }
}

/// Builds the 42 cells showing the month `reference` falls in, starting on the
/// Sunday on or before day 1.
///
/// Leading cells are the last days of the previous month and trailing cells
/// the first days of the next one; both are inactive and never selected. Only
/// the local calendar fields of `reference` are used, so any `Datelike` value
/// maps to the same grid as its naive date.
///
/// At the ends of the range `NaiveDate` can represent the neighbouring months
/// do not exist: the first month of the range gets no leading cells and the
/// last one no trailing cells. The displayed month itself is always complete.
pub fn generate_month_grid<D: Datelike>(reference: &D) -> Vec<CalendarItem> {
    let first = match first_of_month(reference) {
        Some(first) => first,
        None => {
            log::warn!(
                "Cannot build grid for {}-{}: no such month",
                reference.year(),
                reference.month()
            );
            return Vec::new();
        }
    };
    let current_day = reference.day();
    let leading = weekday_index(first.weekday()) as usize;

    let mut items = Vec::with_capacity(GRID_LEN);

    match first.checked_sub_days(Days::new(leading as u64)) {
        Some(start) => items.extend(
            start
                .iter_days()
                .take(leading)
                .map(|date| CalendarItem::new(date, false, false)),
        ),
        None => log::warn!(
            "Grid for {} has no leading days: previous month is out of range",
            first.format("%Y-%m")
        ),
    }

    let days = days_of_month(first.year(), first.month()).unwrap_or_default();
    items.extend(
        (1..=days)
            .filter_map(|day| first.with_day(day))
            .map(|date| CalendarItem::new(date, true, date.day() == current_day)),
    );

    let remaining = GRID_LEN.saturating_sub(items.len());
    if let Some(next_first) = first.checked_add_months(Months::new(1)) {
        items.extend(
            next_first
                .iter_days()
                .take(remaining)
                .map(|date| CalendarItem::new(date, false, false)),
        );
    }

    if items.len() != GRID_LEN {
        log::warn!(
            "Grid for {} has {} cells instead of {}",
            first.format("%Y-%m"),
            items.len(),
            GRID_LEN
        );
    }

    items
}

/// Splits a grid into its rows, Sunday to Saturday.
pub fn weeks(items: &[CalendarItem]) -> Chunks<'_, CalendarItem> {
    items.chunks(WEEK_LEN)
}
