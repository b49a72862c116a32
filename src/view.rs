use chrono::NaiveDate;
use std::fmt;

use crate::config::ViewConfig;
use crate::grid::{weeks, CalendarItem, WEEK_LEN};
use crate::names::DAY_NAMES;
use crate::state::CalendarState;

/// Plain text month table for a `CalendarState`.
pub struct MonthView<'a> {
    state: &'a CalendarState,
    today: Option<NaiveDate>,
    show_adjacent: bool,
    header: bool,
    selected_marker: char,
    today_marker: char,
}

impl<'a> MonthView<'a> {
    const CELL_WIDTH: usize = 5;

    pub fn new(state: &'a CalendarState) -> Self {
        MonthView::with_config(state, &ViewConfig::default())
    }

    pub fn with_config(state: &'a CalendarState, config: &ViewConfig) -> Self {
        MonthView {
            state,
            today: None,
            show_adjacent: config.show_adjacent,
            header: config.header,
            selected_marker: config.selected_marker,
            today_marker: config.today_marker,
        }
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn show_adjacent(mut self, show: bool) -> Self {
        self.show_adjacent = show;
        self
    }

    pub fn width() -> usize {
        WEEK_LEN * Self::CELL_WIDTH
    }

    fn cell(&self, item: &CalendarItem) -> String {
        if !item.active && !self.show_adjacent {
            return " ".repeat(Self::CELL_WIDTH);
        }

        let marker = if item.selected {
            self.selected_marker
        } else if self.today == Some(item.full_date) {
            self.today_marker
        } else {
            ' '
        };

        format!("{:>width$}{}", item.date, marker, width = Self::CELL_WIDTH - 1)
    }
}

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.header {
            let month = self.state.month();
            let title = format!("{} {}", month.name, self.state.year());
            writeln!(
                f,
                "{}",
                format!("{:^width$}", title, width = Self::width()).trim_end()
            )?;
        }

        let labels: String = DAY_NAMES
            .iter()
            .map(|name| format!("{:>width$} ", &name[..3], width = Self::CELL_WIDTH - 1))
            .collect();
        writeln!(f, "{}", labels.trim_end())?;

        for week in weeks(self.state.items()) {
            let row: String = week.iter().map(|item| self.cell(item)).collect();
            writeln!(f, "{}", row.trim_end())?;
        }

        Ok(())
    }
}
