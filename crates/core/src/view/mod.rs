//! Per-granularity calendar view models.
//!
//! One builder turns a movement snapshot and a view request into a tagged
//! view model:
//! - Daily: the day's movements with their summary
//! - Weekly: seven day buckets, Monday through Sunday
//! - Monthly: a fixed 6 x 7 calendar grid
//! - Annual: twelve month buckets

pub mod builder;
pub mod grid;
pub mod types;


pub use builder::ViewModelBuilder;
pub use grid::{MonthGrid, GRID_CELLS, GRID_COLUMNS, GRID_ROWS};
pub use types::{
    AnnualView, CalendarCell, DailyView, DayBucket, MonthBucket, MonthlyView, ViewModel,
    ViewRequest, WeeklyView,
};
