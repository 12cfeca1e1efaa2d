//! Date-sorted view over a movement snapshot.

use chrono::NaiveDate;
use tracing::warn;

use super::summary::{DailyTotals, PeriodSummary};
use crate::calendar::DateRange;
use crate::movement::{DateKey, DateNormalizer, Movement};

/// Movements keyed by their normalized day, sorted by key.
///
/// Building the index normalizes every date exactly once. Movements without
/// a usable date are left out and counted in `skipped`. Movements sharing a
/// day keep their snapshot order.
#[derive(Debug, Clone)]
pub struct MovementIndex<'a> {
    entries: Vec<(DateKey, &'a Movement)>,
    skipped: usize,
}

impl<'a> MovementIndex<'a> {
    /// Indexes a snapshot.
    #[must_use]
    pub fn build(movements: &'a [Movement], normalizer: &DateNormalizer) -> Self {
        let mut entries = Vec::with_capacity(movements.len());
        let mut skipped = 0;

        for movement in movements {
            if let Some(key) = normalizer.movement_key(movement) {
                entries.push((key, movement));
            } else {
                skipped += 1;
                warn!(
                    movement_id = %movement.id,
                    "movement has no usable date; excluded from calendar"
                );
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Self { entries, skipped }
    }

    /// Number of indexed movements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no movement could be indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of movements left out for lack of a usable date.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Movements whose key lies within the range, in date order.
    pub fn in_range<'s>(
        &'s self,
        range: &DateRange,
    ) -> impl Iterator<Item = &'a Movement> + use<'s, 'a> {
        self.between(&range.start_key(), &range.end_key())
            .iter()
            .map(|(_, movement)| *movement)
    }

    /// Movements dated exactly `date`, in snapshot order.
    pub fn on_day(&self, date: NaiveDate) -> impl Iterator<Item = &'a Movement> {
        let key = DateKey::from_date(date);
        self.between(&key, &key).iter().map(|(_, movement)| *movement)
    }

    /// Movements whose key carries the `YYYY-MM` prefix of `date`, in date
    /// order.
    ///
    /// Unlike `in_range` over the month's range, this also picks up verbatim
    /// keys past the month's last real day.
    pub fn in_month(&self, date: NaiveDate) -> impl Iterator<Item = &'a Movement> {
        let (first, last) = DateKey::month_bounds(date);
        self.between(&first, &last).iter().map(|(_, movement)| *movement)
    }

    /// Summary of the movements within the range.
    #[must_use]
    pub fn summarize_range(&self, range: &DateRange) -> PeriodSummary {
        self.in_range(range).collect()
    }

    /// Totals and movement count of one day.
    #[must_use]
    pub fn daily_totals(&self, date: NaiveDate) -> DailyTotals {
        let key = DateKey::from_date(date);
        let day = self.between(&key, &key);
        DailyTotals {
            date,
            summary: day.iter().map(|(_, movement)| *movement).collect(),
            count: day.len(),
        }
    }

    fn between(&self, first: &DateKey, last: &DateKey) -> &[(DateKey, &'a Movement)] {
        let lo = self.entries.partition_point(|(key, _)| key < first);
        let hi = self.entries.partition_point(|(key, _)| key <= last);
        &self.entries[lo..hi.max(lo)]
    }
}
