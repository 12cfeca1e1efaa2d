//! Movement date normalization.
//!
//! Every movement is bucketed by a local `YYYY-MM-DD` key. Text that already
//! has that shape is used verbatim so it cannot drift across a time zone
//! boundary; anything else is resolved to a local calendar day first.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::MovementError;
use super::types::Movement;

/// Naive timestamp layouts read as local wall-clock time.
const LOCAL_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A movement date as handed over by the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovementDate {
    /// Unix epoch milliseconds.
    Millis(i64),
    /// `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive local timestamp.
    Text(String),
    /// An already resolved calendar day.
    Day(NaiveDate),
    /// A local wall-clock timestamp.
    Local(NaiveDateTime),
    /// Any other JSON shape (objects, fractional epochs, booleans).
    ///
    /// Kept so one malformed record does not fail the whole snapshot; it
    /// never normalizes to a day.
    Unreadable(serde_json::Value),
}

impl MovementDate {
    /// Returns true for empty text, which counts as an absent date.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl From<NaiveDate> for MovementDate {
    fn from(date: NaiveDate) -> Self {
        Self::Day(date)
    }
}

impl From<NaiveDateTime> for MovementDate {
    fn from(timestamp: NaiveDateTime) -> Self {
        Self::Local(timestamp)
    }
}

impl From<&str> for MovementDate {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Normalized local calendar day of a movement, `YYYY-MM-DD`.
///
/// Keys order lexicographically, which for this shape is chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Formats a calendar day as a key.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Accepts text of the exact `YYYY-MM-DD` shape.
    ///
    /// The digits are not checked against the calendar, so `2024-02-30`
    /// is a valid key.
    ///
    /// # Errors
    ///
    /// Returns `MovementError::InvalidDateKey` for any other shape.
    pub fn parse(text: &str) -> Result<Self, MovementError> {
        if is_date_key(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(MovementError::InvalidDateKey(text.to_string()))
        }
    }

    /// Lowest and highest keys with the `YYYY-MM` prefix of `date`.
    ///
    /// Every key of that month lies between them, including verbatim keys
    /// such as `2024-02-30` that name no real day.
    #[must_use]
    pub fn month_bounds(date: NaiveDate) -> (Self, Self) {
        let prefix = date.format("%Y-%m");
        (Self(format!("{prefix}-00")), Self(format!("{prefix}-99")))
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the calendar day, if the key names a real one.
    #[must_use]
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true if `text` matches `^\d{4}-\d{2}-\d{2}$`.
fn is_date_key(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Resolves movement dates to local calendar days in a fixed time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    tz: Tz,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl DateNormalizer {
    /// Creates a normalizer for the given local time zone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns the local time zone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Normalizes one raw date. Returns `None` if it cannot be parsed.
    #[must_use]
    pub fn normalize(&self, raw: &MovementDate) -> Option<DateKey> {
        match raw {
            MovementDate::Text(text) => self.normalize_text(text.trim()),
            MovementDate::Millis(millis) => DateTime::from_timestamp_millis(*millis)
                .map(|instant| DateKey::from_date(instant.with_timezone(&self.tz).date_naive())),
            MovementDate::Day(date) => Some(DateKey::from_date(*date)),
            MovementDate::Local(timestamp) => Some(DateKey::from_date(timestamp.date())),
            MovementDate::Unreadable(_) => None,
        }
    }

    /// Resolves the key a movement is bucketed under.
    ///
    /// `date` takes precedence over `created_at`; the latter is only read
    /// when `date` is absent or blank. A present but unparseable `date`
    /// does not fall back.
    #[must_use]
    pub fn movement_key(&self, movement: &Movement) -> Option<DateKey> {
        let primary = movement.date.as_ref().filter(|date| !date.is_blank());
        let fallback = movement.created_at.as_ref().filter(|date| !date.is_blank());

        match (primary, fallback) {
            (Some(date), Some(created_at)) => {
                let key = self.normalize(date);
                let created_key = self.normalize(created_at);
                if key.is_some() && created_key.is_some() && key != created_key {
                    debug!(
                        movement_id = %movement.id,
                        date = ?key,
                        created_at = ?created_key,
                        "movement date disagrees with its creation date; using date"
                    );
                }
                key
            }
            (Some(date), None) => self.normalize(date),
            (None, Some(created_at)) => self.normalize(created_at),
            (None, None) => None,
        }
    }

    fn normalize_text(&self, text: &str) -> Option<DateKey> {
        if is_date_key(text) {
            return Some(DateKey(text.to_string()));
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            return Some(DateKey::from_date(
                instant.with_timezone(&self.tz).date_naive(),
            ));
        }
        LOCAL_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|timestamp| DateKey::from_date(timestamp.date()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::MovementType;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn buenos_aires() -> DateNormalizer {
        DateNormalizer::new(chrono_tz::America::Argentina::Buenos_Aires)
    }

    fn key(text: &str) -> Option<DateKey> {
        Some(DateKey::parse(text).unwrap())
    }

    #[test]
    fn test_late_local_evening_stays_on_same_day() {
        let eleven_pm = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();

        for normalizer in [DateNormalizer::default(), buenos_aires()] {
            assert_eq!(
                normalizer.normalize(&MovementDate::Local(eleven_pm)),
                key("2024-03-15")
            );
        }
    }

    #[rstest]
    #[case("2024-03-15", "2024-03-15")]
    #[case("  2024-03-15 ", "2024-03-15")]
    #[case("2024-02-30", "2024-02-30")]
    #[case("2024-03-16T02:00:00Z", "2024-03-15")]
    #[case("2024-03-16T02:00:00.000Z", "2024-03-15")]
    #[case("2024-03-15T23:30:00-03:00", "2024-03-15")]
    #[case("2024-03-15T23:30:00", "2024-03-15")]
    #[case("2024-03-15 08:15:00.250", "2024-03-15")]
    #[case("2024-03-15T08:15", "2024-03-15")]
    fn test_normalize_text(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(buenos_aires().normalize(&raw.into()), key(expected));
    }

    #[rstest]
    #[case("")]
    #[case("not a date")]
    #[case("15/03/2024")]
    #[case("2024-3-15")]
    fn test_unparseable_text(#[case] raw: &str) {
        assert_eq!(buenos_aires().normalize(&raw.into()), None);
    }

    #[test]
    fn test_unreadable_shapes_normalize_to_none() {
        let shapes: Vec<MovementDate> = serde_json::from_str(
            r#"[{"$date": "2024-03-01T00:00:00Z"}, 1709251200000.5, true, ["2024-03-01"]]"#,
        )
        .unwrap();

        assert_eq!(shapes.len(), 4);
        for shape in &shapes {
            assert!(matches!(shape, MovementDate::Unreadable(_)));
            assert_eq!(buenos_aires().normalize(shape), None);
        }
    }

    #[test]
    fn test_unreadable_date_does_not_fall_back() {
        let movement = Movement::new(
            "m",
            MovementDate::Unreadable(serde_json::json!({"$date": "2024-03-01"})),
            MovementType::Income,
            dec!(1),
        )
        .with_created_at("2024-03-09".into());
        assert_eq!(buenos_aires().movement_key(&movement), None);
    }

    #[test]
    fn test_millis_use_local_zone() {
        // 2024-03-16T02:00:00Z
        let raw = MovementDate::Millis(1_710_554_400_000);
        assert_eq!(DateNormalizer::default().normalize(&raw), key("2024-03-16"));
        assert_eq!(buenos_aires().normalize(&raw), key("2024-03-15"));
    }

    #[test]
    fn test_movement_key_prefers_date_over_created_at() {
        let movement = Movement::new("m", "2024-03-01".into(), MovementType::Income, dec!(1))
            .with_created_at("2024-03-09T12:00:00Z".into());
        assert_eq!(buenos_aires().movement_key(&movement), key("2024-03-01"));
    }

    #[test]
    fn test_movement_key_falls_back_to_created_at() {
        let mut movement = Movement::new("m", "".into(), MovementType::Income, dec!(1))
            .with_created_at("2024-03-09T12:00:00Z".into());
        assert_eq!(buenos_aires().movement_key(&movement), key("2024-03-09"));

        movement.date = None;
        assert_eq!(buenos_aires().movement_key(&movement), key("2024-03-09"));
    }

    #[test]
    fn test_unparseable_date_does_not_fall_back() {
        let movement = Movement::new("m", "garbage".into(), MovementType::Income, dec!(1))
            .with_created_at("2024-03-09".into());
        assert_eq!(buenos_aires().movement_key(&movement), None);
    }

    #[test]
    fn test_movement_without_any_date() {
        let mut movement = Movement::new("m", "".into(), MovementType::Expense, dec!(1));
        movement.date = None;
        assert_eq!(buenos_aires().movement_key(&movement), None);
    }

    #[test]
    fn test_date_key_parse_and_order() {
        assert!(DateKey::parse("2024-03-15").is_ok());
        assert_eq!(
            DateKey::parse("2024/03/15"),
            Err(MovementError::InvalidDateKey("2024/03/15".into()))
        );
        assert!(DateKey::parse("2024-02-28").unwrap() < DateKey::parse("2024-02-30").unwrap());
        assert!(DateKey::parse("2024-02-30").unwrap() < DateKey::parse("2024-03-01").unwrap());
        assert_eq!(DateKey::parse("2024-02-30").unwrap().to_date(), None);
    }

    #[test]
    fn test_month_bounds_cover_whole_prefix() {
        let (first, last) = DateKey::month_bounds(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());

        for text in ["2024-02-01", "2024-02-29", "2024-02-30", "2024-02-00"] {
            let key = DateKey::parse(text).unwrap();
            assert!(key >= first && key <= last, "{text}");
        }
        for text in ["2024-01-31", "2024-03-01"] {
            let key = DateKey::parse(text).unwrap();
            assert!(key < first || key > last, "{text}");
        }
    }
}
