//! Month calendar grid layout.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{first_of_month, last_of_month};

/// Columns of the grid, Monday through Sunday.
pub const GRID_COLUMNS: usize = 7;
/// Rows of the grid; six always fit any month.
pub const GRID_ROWS: usize = 6;
/// Cells of the grid.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Where a month falls inside the fixed 42-cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Date of the top-left cell.
    pub first_cell: NaiveDate,
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Trailing days of the previous month padding the first row.
    pub leading_days: usize,
    /// Days of the month itself.
    pub month_days: usize,
    /// Days of the next month filling the grid up to 42 cells.
    pub trailing_days: usize,
}

impl MonthGrid {
    /// Lays out the month containing `reference`.
    ///
    /// The first row starts on Monday: a month starting on Sunday is padded
    /// with six days, otherwise with `weekday - 1`.
    #[must_use]
    pub fn for_month(reference: NaiveDate) -> Self {
        let month_start = first_of_month(reference);
        let leading_days = month_start.weekday().num_days_from_monday() as usize;
        let month_days = last_of_month(reference).day() as usize;
        let first_cell = month_start
            .checked_sub_days(Days::new(leading_days as u64))
            .unwrap_or(month_start);

        Self {
            first_cell,
            month_start,
            leading_days,
            month_days,
            trailing_days: GRID_CELLS - leading_days - month_days,
        }
    }

    /// The 42 consecutive dates of the grid.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.first_cell.iter_days().take(GRID_CELLS)
    }

    /// Returns true if `date` is part of the laid-out month.
    #[must_use]
    pub fn is_current_month(&self, date: NaiveDate) -> bool {
        date.year() == self.month_start.year() && date.month() == self.month_start.month()
    }
}
