//! View model construction.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::grid::MonthGrid;
use super::types::{
    AnnualView, CalendarCell, DailyView, DayBucket, MonthBucket, MonthlyView, ViewModel,
    ViewRequest, WeeklyView,
};
use crate::aggregate::{MovementAggregator, MovementIndex, PeriodSummary};
use crate::calendar::{period_title, resolve_range, Granularity};
use crate::movement::Movement;

/// Builds calendar view models from a movement snapshot.
///
/// Stateless apart from the aggregator's time zone; every call recomputes
/// from the snapshot it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewModelBuilder {
    aggregator: MovementAggregator,
}

impl ViewModelBuilder {
    /// Creates a builder.
    #[must_use]
    pub const fn new(aggregator: MovementAggregator) -> Self {
        Self { aggregator }
    }

    /// Returns the aggregator in use.
    #[must_use]
    pub const fn aggregator(&self) -> &MovementAggregator {
        &self.aggregator
    }

    /// Builds the view selected by `request`.
    #[must_use]
    pub fn build(&self, movements: &[Movement], request: &ViewRequest) -> ViewModel {
        let index = self.aggregator.index(movements);
        let view = match request.granularity {
            Granularity::Day => ViewModel::Daily(Self::daily(&index, request)),
            Granularity::Week => ViewModel::Weekly(Self::weekly(&index, request)),
            Granularity::Month => ViewModel::Monthly(Self::monthly(&index, request)),
            Granularity::Year => ViewModel::Annual(Self::annual(&index, request)),
        };

        debug!(
            view = %request.granularity,
            range = %view.range(),
            indexed = index.len(),
            skipped = index.skipped(),
            balance = %view.summary().balance,
            "built calendar view"
        );
        view
    }

    /// Movements and totals of the reference day.
    #[must_use]
    pub fn daily(index: &MovementIndex<'_>, request: &ViewRequest) -> DailyView {
        let totals = index.daily_totals(request.reference);
        DailyView {
            range: resolve_range(request.reference, Granularity::Day),
            title: period_title(request.reference, Granularity::Day),
            movements: index.on_day(request.reference).cloned().collect(),
            summary: totals.summary,
            categories: MovementAggregator::category_breakdown(index.on_day(request.reference)),
        }
    }

    /// Seven day buckets of the reference week.
    #[must_use]
    pub fn weekly(index: &MovementIndex<'_>, request: &ViewRequest) -> WeeklyView {
        let range = resolve_range(request.reference, Granularity::Week);
        let days = range
            .days()
            .map(|date| {
                let totals = index.daily_totals(date);
                DayBucket {
                    date,
                    summary: totals.summary,
                    count: totals.count,
                    is_today: date == request.today,
                }
            })
            .collect();

        WeeklyView {
            range,
            title: period_title(request.reference, Granularity::Week),
            days,
            summary: index.summarize_range(&range),
        }
    }

    /// 42-cell calendar grid of the reference month.
    #[must_use]
    pub fn monthly(index: &MovementIndex<'_>, request: &ViewRequest) -> MonthlyView {
        let range = resolve_range(request.reference, Granularity::Month);
        let grid = MonthGrid::for_month(request.reference);
        let cells = grid
            .dates()
            .map(|date| {
                let totals = index.daily_totals(date);
                CalendarCell {
                    date,
                    belongs_to_current_month: grid.is_current_month(date),
                    summary: totals.summary,
                    count: totals.count,
                    is_today: date == request.today,
                }
            })
            .collect();

        MonthlyView {
            range,
            title: period_title(request.reference, Granularity::Month),
            cells,
            summary: index.in_month(request.reference).collect(),
            leading_days: grid.leading_days,
            trailing_days: grid.trailing_days,
        }
    }

    /// Twelve month buckets of the reference year.
    #[must_use]
    pub fn annual(index: &MovementIndex<'_>, request: &ViewRequest) -> AnnualView {
        let range = resolve_range(request.reference, Granularity::Year);
        let year = range.start_date().year();
        let months: Vec<MonthBucket> = (1..=12u32)
            .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
            .map(|first| MonthBucket {
                month_index: first.month0(),
                summary: index.in_month(first).collect(),
                count: index.in_month(first).count(),
            })
            .collect();

        // The year is exactly its twelve buckets.
        let summary: PeriodSummary = months.iter().map(|month| month.summary).sum();

        AnnualView {
            range,
            title: period_title(request.reference, Granularity::Year),
            months,
            summary,
        }
    }
}
