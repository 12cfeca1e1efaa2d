//! Property-based tests for range resolution and navigation.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use super::range::{advance, resolve_range, DateRange, Direction, Granularity};

/// Strategy for days between roughly 1863 and 2136.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (-50_000i64..50_000i64).prop_map(|offset| {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        if offset >= 0 {
            epoch + Days::new(offset.unsigned_abs())
        } else {
            epoch - Days::new(offset.unsigned_abs())
        }
    })
}

fn granularity_strategy() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Day),
        Just(Granularity::Week),
        Just(Granularity::Month),
        Just(Granularity::Year),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Resolving the same selection twice yields the same range.
    #[test]
    fn prop_resolve_range_is_idempotent(
        reference in date_strategy(),
        granularity in granularity_strategy(),
    ) {
        prop_assert_eq!(
            resolve_range(reference, granularity),
            resolve_range(reference, granularity)
        );
    }

    /// The resolved range always contains the reference day.
    #[test]
    fn prop_range_contains_reference(
        reference in date_strategy(),
        granularity in granularity_strategy(),
    ) {
        let range = resolve_range(reference, granularity);
        prop_assert!(range.contains(reference));
        prop_assert!(range.start < range.end);
    }

    /// Weeks start on Monday and end six days later.
    #[test]
    fn prop_week_starts_monday(reference in date_strategy()) {
        let range = resolve_range(reference, Granularity::Week);
        prop_assert_eq!(range.start_date().weekday(), Weekday::Mon);
        prop_assert_eq!(range.start_date() + Days::new(6), range.end_date());
    }

    /// Every day of a resolved range resolves back to the same range.
    #[test]
    fn prop_ranges_partition_time(
        reference in date_strategy(),
        granularity in granularity_strategy(),
    ) {
        let range = resolve_range(reference, granularity);
        for day in [range.start_date(), range.end_date()] {
            prop_assert_eq!(resolve_range(day, granularity), range);
        }
        let before = range.start_date().pred_opt().unwrap();
        let after = range.end_date().succ_opt().unwrap();
        prop_assert!(!range.contains(before));
        prop_assert!(!range.contains(after));
    }

    /// Moving forward lands in the adjacent period.
    #[test]
    fn prop_advance_next_lands_in_following_period(
        reference in date_strategy(),
        granularity in granularity_strategy(),
    ) {
        let range = resolve_range(reference, granularity);
        let next = advance(reference, granularity, Direction::Next);
        let next_range: DateRange = resolve_range(next, granularity);
        prop_assert_eq!(next_range.start_date(), range.end_date().succ_opt().unwrap());
    }

    /// Day and week navigation is reversible.
    #[test]
    fn prop_day_and_week_navigation_round_trips(
        reference in date_strategy(),
        granularity in prop_oneof![Just(Granularity::Day), Just(Granularity::Week)],
    ) {
        let there = advance(reference, granularity, Direction::Next);
        prop_assert_eq!(advance(there, granularity, Direction::Previous), reference);
    }
}
