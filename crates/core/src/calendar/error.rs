//! Calendar error types.

use thiserror::Error;

/// Errors raised while parsing calendar selections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Granularity name not recognized.
    #[error("Unknown granularity: {0} (expected day, week, month or year)")]
    UnknownGranularity(String),
}
