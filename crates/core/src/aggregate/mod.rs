//! Income and expense aggregation over a movement snapshot.
//!
//! This module provides pure aggregation logic:
//! - Period summaries (income, expense, balance)
//! - Per-day totals with movement counts
//! - Per-category breakdowns
//! - A date-sorted index so one snapshot can be bucketed many times

pub mod index;
pub mod service;
pub mod summary;


pub use index::MovementIndex;
pub use service::MovementAggregator;
pub use summary::{CategoryTotal, DailyTotals, PeriodSummary};
