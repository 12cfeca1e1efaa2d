//! Accounting calendar logic for Ledgerview.
//!
//! This crate contains pure computation over a pre-loaded snapshot of
//! financial movements. It performs no I/O and never reads the clock.
//!
//! # Modules
//!
//! - `movement` - Movement records and local date normalization
//! - `calendar` - Granularities, date ranges, and period navigation
//! - `aggregate` - Income/expense summaries per range, day, and category
//! - `view` - Daily, weekly, monthly-grid, and annual view models

pub mod aggregate;
pub mod calendar;
pub mod movement;
pub mod view;

pub use aggregate::{MovementAggregator, PeriodSummary};
pub use calendar::{DateRange, Direction, Granularity};
pub use movement::{Movement, MovementDate, MovementType};
pub use view::{ViewModel, ViewModelBuilder, ViewRequest};
