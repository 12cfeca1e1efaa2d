//! Movement aggregation service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::index::MovementIndex;
use super::summary::{CategoryTotal, DailyTotals, PeriodSummary};
use crate::calendar::DateRange;
use crate::movement::{DateKey, DateNormalizer, Movement};

/// Filters and sums movements by local calendar day.
///
/// Every operation treats the movement slice as a read-only snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementAggregator {
    normalizer: DateNormalizer,
}

impl MovementAggregator {
    /// Creates an aggregator that resolves timestamps in `tz`.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self {
            normalizer: DateNormalizer::new(tz),
        }
    }

    /// Returns the date normalizer in use.
    #[must_use]
    pub const fn normalizer(&self) -> &DateNormalizer {
        &self.normalizer
    }

    /// Builds a date-sorted index of the snapshot.
    #[must_use]
    pub fn index<'a>(&self, movements: &'a [Movement]) -> MovementIndex<'a> {
        MovementIndex::build(movements, &self.normalizer)
    }

    /// Returns the movements whose normalized day lies within `range`,
    /// boundaries included, in snapshot order.
    #[must_use]
    pub fn filter_in_range<'a>(
        &self,
        movements: &'a [Movement],
        range: &DateRange,
    ) -> Vec<&'a Movement> {
        let (first, last) = (range.start_key(), range.end_key());
        movements
            .iter()
            .filter(|movement| {
                self.normalizer
                    .movement_key(movement)
                    .is_some_and(|key| key >= first && key <= last)
            })
            .collect()
    }

    /// Sums income and expense. An empty input yields zeros.
    #[must_use]
    pub fn summarize<'a>(movements: impl IntoIterator<Item = &'a Movement>) -> PeriodSummary {
        movements.into_iter().collect()
    }

    /// Summary of the movements within `range`.
    #[must_use]
    pub fn summarize_range(&self, movements: &[Movement], range: &DateRange) -> PeriodSummary {
        Self::summarize(self.filter_in_range(movements, range))
    }

    /// Totals and movement count of the single day `date`.
    #[must_use]
    pub fn daily_totals(&self, movements: &[Movement], date: NaiveDate) -> DailyTotals {
        let key = DateKey::from_date(date);
        let day: Vec<&Movement> = movements
            .iter()
            .filter(|movement| self.normalizer.movement_key(movement).as_ref() == Some(&key))
            .collect();

        DailyTotals {
            date,
            summary: Self::summarize(day.iter().copied()),
            count: day.len(),
        }
    }

    /// Per-category totals, ordered by category with uncategorized first.
    #[must_use]
    pub fn category_breakdown<'a>(
        movements: impl IntoIterator<Item = &'a Movement>,
    ) -> Vec<CategoryTotal> {
        let mut groups: BTreeMap<Option<&str>, (PeriodSummary, usize)> = BTreeMap::new();
        for movement in movements {
            let category = movement
                .category
                .as_deref()
                .map(str::trim)
                .filter(|label| !label.is_empty());
            let (summary, count) = groups.entry(category).or_default();
            summary.record(movement);
            *count += 1;
        }

        groups
            .into_iter()
            .map(|(category, (summary, count))| CategoryTotal {
                category: category.map(str::to_string),
                summary,
                count,
            })
            .collect()
    }
}
