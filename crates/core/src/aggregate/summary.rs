//! Aggregated totals.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::movement::{Movement, MovementType};

/// Income, expense and balance of a bucket.
///
/// Amounts keep full precision; rounding is a display concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Sum of income amounts.
    pub income: Decimal,
    /// Sum of expense amounts.
    pub expense: Decimal,
    /// Income minus expense.
    pub balance: Decimal,
}

impl PeriodSummary {
    /// Creates a summary from income and expense totals.
    #[must_use]
    pub fn new(income: Decimal, expense: Decimal) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Adds one movement. Unknown types leave the summary unchanged.
    pub fn record(&mut self, movement: &Movement) {
        match movement.movement_type {
            MovementType::Income => self.income += movement.amount,
            MovementType::Expense => self.expense += movement.amount,
            MovementType::Unknown => return,
        }
        self.balance = self.income - self.expense;
    }

    /// Returns true if every total is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }
}

impl Add for PeriodSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            income: self.income + rhs.income,
            expense: self.expense + rhs.expense,
            balance: self.balance + rhs.balance,
        }
    }
}

impl AddAssign for PeriodSummary {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for PeriodSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> FromIterator<&'a Movement> for PeriodSummary {
    fn from_iter<I: IntoIterator<Item = &'a Movement>>(iter: I) -> Self {
        let mut summary = Self::default();
        for movement in iter {
            summary.record(movement);
        }
        summary
    }
}

/// Totals of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// The day.
    pub date: NaiveDate,
    /// Totals of the day's movements.
    #[serde(flatten)]
    pub summary: PeriodSummary,
    /// Number of movements dated that day, including unknown types.
    pub count: usize,
}

impl DailyTotals {
    /// Returns true if any movement is dated that day.
    ///
    /// Distinguishes an empty day from one whose movements cancel out.
    #[must_use]
    pub const fn has_movements(&self) -> bool {
        self.count > 0
    }
}

/// Totals of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label; `None` groups uncategorized movements.
    pub category: Option<String>,
    /// Totals of the category's movements.
    #[serde(flatten)]
    pub summary: PeriodSummary,
    /// Number of movements in the category.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn movement(movement_type: MovementType, amount: Decimal) -> Movement {
        Movement::new("m", "2024-03-04".into(), movement_type, amount)
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary: PeriodSummary = std::iter::empty::<&Movement>().collect();
        assert_eq!(summary, PeriodSummary::default());
        assert!(summary.is_zero());
    }

    #[test]
    fn test_record_keeps_full_precision() {
        let movements = [
            movement(MovementType::Income, dec!(1000.335)),
            movement(MovementType::Expense, dec!(0.005)),
        ];
        let summary: PeriodSummary = movements.iter().collect();
        assert_eq!(summary, PeriodSummary::new(dec!(1000.335), dec!(0.005)));
        assert_eq!(summary.balance, dec!(1000.330));
    }

    #[test]
    fn test_unknown_type_contributes_nothing() {
        let mut summary = PeriodSummary::default();
        summary.record(&movement(MovementType::Unknown, dec!(50)));
        assert!(summary.is_zero());
        assert_eq!(summary.balance, Decimal::ZERO);
    }

    #[test]
    fn test_negative_balance() {
        let summary = PeriodSummary::new(dec!(100), dec!(250));
        assert_eq!(summary.balance, dec!(-150));
        assert!(!summary.is_zero());
    }

    #[test]
    fn test_sum_of_summaries() {
        let total: PeriodSummary = [
            PeriodSummary::new(dec!(10), dec!(5)),
            PeriodSummary::new(dec!(0), dec!(20)),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, PeriodSummary::new(dec!(10), dec!(25)));
    }

    #[test]
    fn test_daily_totals_serializes_flat() {
        let totals = DailyTotals {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            summary: PeriodSummary::new(dec!(1000), dec!(400)),
            count: 2,
        };
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["date"], "2024-03-04");
        assert_eq!(json["income"], "1000");
        assert_eq!(json["balance"], "600");
        assert_eq!(json["count"], 2);
        assert!(totals.has_movements());
    }
}
