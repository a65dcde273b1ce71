//! Money type for representing monetary values.
//!
//! The storefront prices in whole rubles. Amounts are integers so subtotals
//! and fees never pick up floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ruble sign, written after the amount ("1200 ₽").
pub const RUBLE_SIGN: &str = "\u{20bd}";

/// An amount in whole rubles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in rubles.
    pub amount: i64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero rubles.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Add, clamping at the numeric bounds.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount))
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor))
    }

    /// Format as a display string (e.g., "1200 ₽").
    pub fn display(&self) -> String {
        format!("{} {}", self.amount, RUBLE_SIGN)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(1200).display(), "1200 \u{20bd}");
        assert_eq!(Money::zero().to_string(), "0 ₽");
    }

    #[test]
    fn test_saturating_arithmetic() {
        let m = Money::new(i64::MAX);
        assert_eq!(m.saturating_multiply(2).amount, i64::MAX);
        assert_eq!(m.saturating_add(&Money::new(1)).amount, i64::MAX);
        assert_eq!(Money::new(450).saturating_multiply(3), Money::new(1350));
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Money::new(150)).unwrap(), "150");
    }
}
