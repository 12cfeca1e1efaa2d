//! Movement error types.

use thiserror::Error;

/// Errors raised while reading movement input.
///
/// The aggregation itself never fails; these only surface from explicit
/// parsing helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MovementError {
    /// Text is not a `YYYY-MM-DD` date key.
    #[error("Invalid date key: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateKey(String),

    /// Text is not a known movement type.
    #[error("Unknown movement type: {0}")]
    UnknownType(String),
}
