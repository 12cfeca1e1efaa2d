//! Sources of the current date.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Supplies "today" to callers that build view requests.
pub trait Clock {
    /// Returns the current local calendar day.
    fn today(&self) -> NaiveDate;
}

/// Wall clock read in a configured time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a clock for the given local time zone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Clock pinned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
