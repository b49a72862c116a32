use chrono::{Datelike, Local, Months, NaiveDate};
use once_cell::unsync::OnceCell;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::{Error, ErrorKind, Result};
use crate::grid::{generate_month_grid, CalendarItem};
use crate::names::{first_of_month, month_name, weekday_index, weekday_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthInfo {
    /// 0-based, January is 0.
    pub index: u32,
    /// 1-based, January is 1.
    pub number: u32,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    /// Weekday index, Sunday is 0.
    pub index: u32,
    /// Day of month.
    pub number: u32,
    pub name: &'static str,
}

/// Serializable view of every field a `CalendarState` exposes.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub date: NaiveDate,
    pub year: i32,
    pub month: MonthInfo,
    pub day: DayInfo,
    pub items: &'a [CalendarItem],
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

/// Focused date of a month view together with everything derived from it.
///
/// Every transition replaces the reference date as a whole, drops the cached
/// grid and sends the new date to all subscribers.
#[derive(Debug)]
pub struct CalendarState {
    date: NaiveDate,
    items: OnceCell<Vec<CalendarItem>>,
    subscribers: Vec<Sender<NaiveDate>>,
}

impl Default for CalendarState {
    fn default() -> Self {
        CalendarState::today()
    }
}

impl From<NaiveDate> for CalendarState {
    fn from(date: NaiveDate) -> Self {
        CalendarState::new(date)
    }
}

impl CalendarState {
    pub fn new(date: NaiveDate) -> Self {
        CalendarState {
            date,
            items: OnceCell::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn today() -> Self {
        CalendarState::new(Local::now().date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarState::new)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidDate,
                    &format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> MonthInfo {
        MonthInfo {
            index: self.date.month0(),
            number: self.date.month(),
            name: month_name(self.date.month()),
        }
    }

    pub fn day(&self) -> DayInfo {
        let weekday = self.date.weekday();
        DayInfo {
            index: weekday_index(weekday),
            number: self.date.day(),
            name: weekday_name(weekday),
        }
    }

    /// Grid of the displayed month, built on first access after a transition.
    pub fn items(&self) -> &[CalendarItem] {
        self.items.get_or_init(|| generate_month_grid(&self.date))
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            date: self.date,
            year: self.year(),
            month: self.month(),
            day: self.day(),
            items: self.items(),
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.replace(date);
    }

    pub fn select_today(&mut self) {
        self.replace(Local::now().date_naive());
    }

    /// Moves to day 1 of the previous month.
    pub fn prev_month(&mut self) -> Result<()> {
        let target = self
            .first_of_month()?
            .checked_sub_months(Months::new(1))
            .ok_or_else(|| self.out_of_range("before"))?;
        self.replace(target);
        Ok(())
    }

    /// Moves to day 1 of the next month.
    pub fn next_month(&mut self) -> Result<()> {
        let target = self
            .first_of_month()?
            .checked_add_months(Months::new(1))
            .ok_or_else(|| self.out_of_range("after"))?;
        self.replace(target);
        Ok(())
    }

    /// Returns a receiver that gets the new reference date after every
    /// transition. Dropping the receiver ends the subscription.
    pub fn subscribe(&mut self) -> Receiver<NaiveDate> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn first_of_month(&self) -> Result<NaiveDate> {
        first_of_month(&self.date).ok_or_else(|| Error::from(ErrorKind::InvalidDate))
    }

    fn out_of_range(&self, direction: &str) -> Error {
        Error::new(
            ErrorKind::OutOfRange,
            &format!("no month {} {}", direction, self.date),
        )
    }

    fn replace(&mut self, date: NaiveDate) {
        log::debug!("Reference date {} -> {}", self.date, date);

        self.date = date;
        self.items = OnceCell::new();
        self.subscribers.retain(|tx| tx.send(date).is_ok());
    }
}
