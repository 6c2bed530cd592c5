//! Type-safe price representation using decimal arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in the store currency, US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in dollars, not cents.
    pub amount: Decimal,
}

impl Price {
    /// Create a price in dollars.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self { amount }
    }

    /// The amount rounded half away from zero to two fraction digits.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., "$19.99").
    ///
    /// Always shows exactly two fraction digits.
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.rounded())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal")
    }

    #[test]
    fn test_display_pads_to_two_digits() {
        assert_eq!(Price::usd(dec("1.5")).display(), "$1.50");
        assert_eq!(Price::usd(dec("3")).display(), "$3.00");
        assert_eq!(Price::usd(dec("0")).display(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Price::usd(dec("2.345")).display(), "$2.35");
        assert_eq!(Price::usd(dec("2.344")).display(), "$2.34");
        assert_eq!(Price::usd(dec("19.999")).display(), "$20.00");
    }

    #[test]
    fn test_display_trait_matches_display() {
        assert_eq!(Price::usd(dec("5")).to_string(), "$5.00");
    }
}
