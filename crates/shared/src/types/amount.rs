//! Display formatting for decimal amounts.
//!
//! Formatting is presentation only. Callers keep the full-precision
//! `Decimal` for any arithmetic and pass it here at the very end.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

/// Formats amounts with digit grouping and zero decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountFormat {
    /// Separator inserted between groups of three digits.
    pub thousands_separator: String,
    /// Magnitude from which `compact` abbreviates to thousands.
    pub abbreviate_from: Decimal,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

impl AmountFormat {
    /// Creates a formatter from display configuration.
    #[must_use]
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            thousands_separator: config.thousands_separator.clone(),
            abbreviate_from: config.abbreviate_from,
        }
    }

    /// Formats an amount rounded to whole units with grouped digits.
    ///
    /// `1234567.6` becomes `1.234.568` with the default separator.
    #[must_use]
    pub fn grouped(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}", self.group_digits(&digits))
    }

    /// Formats an amount for a calendar cell.
    ///
    /// Amounts whose magnitude reaches `abbreviate_from` are rounded to
    /// whole thousands and suffixed with `k`; smaller ones use `grouped`.
    #[must_use]
    pub fn compact(&self, amount: Decimal) -> String {
        if amount.abs() < self.abbreviate_from {
            return self.grouped(amount);
        }
        let thousands = amount / Decimal::ONE_THOUSAND;
        format!("{}k", self.grouped(thousands))
    }

    fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3 * self.thousands_separator.len());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.thousands_separator);
            }
            out.push(ch);
        }
        out
    }
}
