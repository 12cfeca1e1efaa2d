//! View model types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::grid::GRID_COLUMNS;
use crate::aggregate::{CategoryTotal, PeriodSummary};
use crate::calendar::{advance, resolve_range, Clock, DateRange, Direction, Granularity};
use crate::movement::Movement;

/// What to show: the selected period and the current day.
///
/// `today` is supplied by the caller so building a view never reads the
/// system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRequest {
    /// Any day inside the selected period.
    pub reference: NaiveDate,
    /// Selected view.
    pub granularity: Granularity,
    /// Current local day, used for highlighting.
    pub today: NaiveDate,
}

impl ViewRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(reference: NaiveDate, granularity: Granularity, today: NaiveDate) -> Self {
        Self {
            reference,
            granularity,
            today,
        }
    }

    /// Creates a request for the period containing today.
    #[must_use]
    pub fn current(granularity: Granularity, clock: &impl Clock) -> Self {
        let today = clock.today();
        Self::new(today, granularity, today)
    }

    /// Moves to the previous or next period.
    #[must_use]
    pub fn shifted(self, direction: Direction) -> Self {
        Self {
            reference: advance(self.reference, self.granularity, direction),
            ..self
        }
    }

    /// Moves back to the period containing today.
    #[must_use]
    pub const fn at_today(self) -> Self {
        Self {
            reference: self.today,
            ..self
        }
    }

    /// Switches the view, keeping the reference day.
    #[must_use]
    pub const fn with_granularity(self, granularity: Granularity) -> Self {
        Self {
            granularity,
            ..self
        }
    }

    /// Range covered by the selected period.
    #[must_use]
    pub fn range(&self) -> DateRange {
        resolve_range(self.reference, self.granularity)
    }
}

/// One day of the weekly view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// The day.
    pub date: NaiveDate,
    /// Totals of the day.
    #[serde(flatten)]
    pub summary: PeriodSummary,
    /// Number of movements that day.
    pub count: usize,
    /// Whether the day is today.
    pub is_today: bool,
}

/// One cell of the monthly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// The day.
    pub date: NaiveDate,
    /// False for padding days of the neighbouring months.
    pub belongs_to_current_month: bool,
    /// Totals of the day.
    #[serde(flatten)]
    pub summary: PeriodSummary,
    /// Number of movements that day.
    pub count: usize,
    /// Whether the day is today.
    pub is_today: bool,
}

/// One month of the annual view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Zero-based month, 0 = January.
    pub month_index: u32,
    /// Totals of the month.
    #[serde(flatten)]
    pub summary: PeriodSummary,
    /// Number of movements in the month.
    pub count: usize,
}

/// Itemized view of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyView {
    /// Covered range.
    pub range: DateRange,
    /// Display title.
    pub title: String,
    /// The day's movements in snapshot order.
    pub movements: Vec<Movement>,
    /// Totals of the day.
    pub summary: PeriodSummary,
    /// Totals per category.
    pub categories: Vec<CategoryTotal>,
}

/// Seven day buckets, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyView {
    /// Covered range.
    pub range: DateRange,
    /// Display title.
    pub title: String,
    /// Day buckets.
    pub days: Vec<DayBucket>,
    /// Totals of the week.
    pub summary: PeriodSummary,
}

/// Calendar grid of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyView {
    /// Covered range (the month itself, without padding).
    pub range: DateRange,
    /// Display title.
    pub title: String,
    /// Exactly 42 cells in row-major order.
    pub cells: Vec<CalendarCell>,
    /// Totals of the month.
    pub summary: PeriodSummary,
    /// Padding cells from the previous month.
    pub leading_days: usize,
    /// Padding cells from the next month.
    pub trailing_days: usize,
}

impl MonthlyView {
    /// Grid rows of seven cells.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }
}

/// Twelve month buckets, January through December.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualView {
    /// Covered range.
    pub range: DateRange,
    /// Display title.
    pub title: String,
    /// Month buckets.
    pub months: Vec<MonthBucket>,
    /// Totals of the year.
    pub summary: PeriodSummary,
}

/// View data of one granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewModel {
    /// Day view.
    Daily(DailyView),
    /// Week view.
    Weekly(WeeklyView),
    /// Month grid.
    Monthly(MonthlyView),
    /// Year view.
    Annual(AnnualView),
}

impl ViewModel {
    /// Granularity this view was built for.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::Daily(_) => Granularity::Day,
            Self::Weekly(_) => Granularity::Week,
            Self::Monthly(_) => Granularity::Month,
            Self::Annual(_) => Granularity::Year,
        }
    }

    /// Covered range.
    #[must_use]
    pub const fn range(&self) -> &DateRange {
        match self {
            Self::Daily(view) => &view.range,
            Self::Weekly(view) => &view.range,
            Self::Monthly(view) => &view.range,
            Self::Annual(view) => &view.range,
        }
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Daily(view) => &view.title,
            Self::Weekly(view) => &view.title,
            Self::Monthly(view) => &view.title,
            Self::Annual(view) => &view.title,
        }
    }

    /// Totals of the whole period.
    #[must_use]
    pub const fn summary(&self) -> &PeriodSummary {
        match self {
            Self::Daily(view) => &view.summary,
            Self::Weekly(view) => &view.summary,
            Self::Monthly(view) => &view.summary,
            Self::Annual(view) => &view.summary,
        }
    }
}
