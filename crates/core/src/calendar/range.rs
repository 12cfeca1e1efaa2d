//! Date range resolution for calendar views.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;
use crate::movement::DateKey;

/// Aggregation window of a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// A single day.
    Day,
    /// Seven days, Monday through Sunday.
    Week,
    /// A calendar month.
    Month,
    /// A calendar year.
    Year,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for Granularity {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" | "dia" | "día" => Ok(Self::Day),
            "week" | "weekly" | "semana" => Ok(Self::Week),
            "month" | "monthly" | "mes" => Ok(Self::Month),
            "year" | "yearly" | "annual" | "anio" | "año" => Ok(Self::Year),
            _ => Err(CalendarError::UnknownGranularity(s.to_string())),
        }
    }
}

/// Navigation direction between periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One period back.
    Previous,
    /// One period forward.
    Next,
}

/// Inclusive range of calendar days.
///
/// `start` is at 00:00:00.000 of the first day and `end` at 23:59:59.999 of
/// the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the first day.
    pub start: NaiveDateTime,
    /// End of the last day.
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Creates the range covering `first` through `last`, both inclusive.
    #[must_use]
    pub fn for_days(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: last.and_time(end_of_day()),
        }
    }

    /// Returns the first day.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the last day.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Returns the key of the first day.
    #[must_use]
    pub fn start_key(&self) -> DateKey {
        DateKey::from_date(self.start_date())
    }

    /// Returns the key of the last day.
    #[must_use]
    pub fn end_key(&self) -> DateKey {
        DateKey::from_date(self.end_date())
    }

    /// Returns true if the day lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Returns true if the key lies lexicographically within the range.
    #[must_use]
    pub fn contains_key(&self, key: &DateKey) -> bool {
        *key >= self.start_key() && *key <= self.end_key()
    }

    /// Returns the number of days covered.
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days() + 1
    }

    /// Iterates the days of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = self.end_date();
        self.start_date()
            .iter_days()
            .take_while(move |day| *day <= last)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start_date(), self.end_date())
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::MIN
        .overflowing_sub_signed(TimeDelta::milliseconds(1))
        .0
}

/// Resolves the range of the period containing `reference`.
///
/// Weeks start on Monday, so a Sunday belongs to the week that began six
/// days earlier.
#[must_use]
pub fn resolve_range(reference: NaiveDate, granularity: Granularity) -> DateRange {
    match granularity {
        Granularity::Day => DateRange::for_days(reference, reference),
        Granularity::Week => {
            let offset = u64::from(reference.weekday().num_days_from_monday());
            let start = reference
                .checked_sub_days(Days::new(offset))
                .unwrap_or(reference);
            let end = start
                .checked_add_days(Days::new(6))
                .unwrap_or(NaiveDate::MAX);
            DateRange::for_days(start, end)
        }
        Granularity::Month => {
            DateRange::for_days(first_of_month(reference), last_of_month(reference))
        }
        Granularity::Year => {
            let year = reference.year();
            DateRange::for_days(
                NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(reference),
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(reference),
            )
        }
    }
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the last day of the month containing `date`.
#[must_use]
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Shifts `reference` one period in `direction`.
///
/// Month and year shifts clamp to the last valid day of the target month
/// (Jan 31 moves to Feb 29 in 2024). A shift past the representable range
/// leaves the date unchanged.
#[must_use]
pub fn advance(reference: NaiveDate, granularity: Granularity, direction: Direction) -> NaiveDate {
    let shifted = match (granularity, direction) {
        (Granularity::Day, Direction::Next) => reference.checked_add_days(Days::new(1)),
        (Granularity::Day, Direction::Previous) => reference.checked_sub_days(Days::new(1)),
        (Granularity::Week, Direction::Next) => reference.checked_add_days(Days::new(7)),
        (Granularity::Week, Direction::Previous) => reference.checked_sub_days(Days::new(7)),
        (Granularity::Month, Direction::Next) => reference.checked_add_months(Months::new(1)),
        (Granularity::Month, Direction::Previous) => reference.checked_sub_months(Months::new(1)),
        (Granularity::Year, Direction::Next) => reference.checked_add_months(Months::new(12)),
        (Granularity::Year, Direction::Previous) => reference.checked_sub_months(Months::new(12)),
    };
    shifted.unwrap_or(reference)
}

/// Week label number: `ceil(elapsed / 7 days)` where `elapsed` runs from
/// Jan 1 to the moment inside `date`, so Jan 1..=7 is week 1.
///
/// Display only; bucketing always uses `resolve_range`.
#[must_use]
pub fn week_number(date: NaiveDate) -> u32 {
    date.ordinal0() / 7 + 1
}

/// Human title for the period containing `reference`.
#[must_use]
pub fn period_title(reference: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => reference.format("%A %-d %B %Y").to_string(),
        Granularity::Week => format!("Week {} · {}", week_number(reference), reference.year()),
        Granularity::Month => reference.format("%B %Y").to_string(),
        Granularity::Year => reference.format("%Y").to_string(),
    }
}
