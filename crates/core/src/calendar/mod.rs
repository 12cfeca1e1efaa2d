//! Calendar periods and navigation.
//!
//! This module resolves the date range a calendar view covers:
//! - Granularities (day, week starting Monday, month, year)
//! - Inclusive date ranges and their boundaries
//! - Period navigation and display titles
//! - Clocks supplying "today" from outside the computation

pub mod clock;
pub mod error;
pub mod range;

#[cfg(test)]
mod range_props;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CalendarError;
pub use range::{
    advance, first_of_month, last_of_month, period_title, resolve_range, week_number, DateRange,
    Direction, Granularity,
};
