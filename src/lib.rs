//! Month grid calendar: builds the 42-cell view of the month around a
//! reference date and keeps track of that date while a UI navigates.

pub mod config;
pub mod error;
pub mod grid;
pub mod names;
pub mod state;
pub mod view;

pub use error::{Error, ErrorKind, Result};
pub use grid::{generate_month_grid, weeks, CalendarItem, GRID_LEN};
pub use state::{CalendarState, DayInfo, MonthInfo, Snapshot};
