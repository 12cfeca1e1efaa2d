//! Financial movement records and their calendar dates.
//!
//! This module defines the input snapshot the calendar works on:
//! - Movement records (income or expense, with a non-negative amount)
//! - Raw date representations handed over by the API layer
//! - Normalization of those dates to local `YYYY-MM-DD` keys

pub mod date;
pub mod error;
pub mod types;

pub use date::{DateKey, DateNormalizer, MovementDate};
pub use error::MovementError;
pub use types::{Movement, MovementId, MovementType};
