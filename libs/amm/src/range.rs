//! Price range for new liquidity positions
//!
//! Creating a pool starts from a starting price. Unless the position is
//! full range, the default bounds sit 50% either side of it and are shown
//! to six decimals; the user may then edit either bound.

use crate::error::{QuoteError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Fractional digits the bounds are rounded to
pub const RANGE_DECIMALS: u32 = 6;

/// Default lower bound as a multiple of the starting price
pub const DEFAULT_LOWER_FACTOR: Decimal = dec!(0.5);

/// Default upper bound as a multiple of the starting price
pub const DEFAULT_UPPER_FACTOR: Decimal = dec!(1.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceRange {
    /// Liquidity active at every price
    Full,
    Bounded { min: Decimal, max: Decimal },
}

impl PriceRange {
    /// Default range 50% below to 50% above `starting_price`
    pub fn around(starting_price: Decimal) -> Result<Self> {
        if starting_price <= Decimal::ZERO {
            return Err(QuoteError::invalid(format!(
                "starting price must be positive: {}",
                starting_price
            )));
        }

        let scaled = |factor: Decimal| {
            starting_price
                .checked_mul(factor)
                .map(|bound| {
                    bound.round_dp_with_strategy(
                        RANGE_DECIMALS,
                        RoundingStrategy::MidpointAwayFromZero,
                    )
                })
                .ok_or(QuoteError::Overflow("price range bound"))
        };

        Self::bounded(scaled(DEFAULT_LOWER_FACTOR)?, scaled(DEFAULT_UPPER_FACTOR)?)
    }

    /// User-edited bounds; requires `0 <= min < max`
    pub fn bounded(min: Decimal, max: Decimal) -> Result<Self> {
        if min.is_sign_negative() && !min.is_zero() {
            return Err(QuoteError::invalid(format!("range minimum is negative: {}", min)));
        }
        if min >= max {
            return Err(QuoteError::invalid(format!(
                "range minimum {} must be below maximum {}",
                min, max
            )));
        }
        Ok(PriceRange::Bounded { min, max })
    }

    /// Full range when requested, otherwise the default range around the price
    pub fn for_new_pool(starting_price: Decimal, full_range: bool) -> Result<Self> {
        if full_range {
            Ok(PriceRange::Full)
        } else {
            Self::around(starting_price)
        }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        match self {
            PriceRange::Full => true,
            PriceRange::Bounded { min, max } => *min <= price && price <= *max,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, PriceRange::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_brackets_price() {
        let range = PriceRange::around(dec!(150)).unwrap();
        assert_eq!(range, PriceRange::Bounded { min: dec!(75), max: dec!(225) });
        assert!(range.contains(dec!(150)));
        assert!(range.contains(dec!(75)));
        assert!(!range.contains(dec!(225.000001)));
    }

    #[test]
    fn test_bounds_rounded_to_six_decimals() {
        let range = PriceRange::around(dec!(0.006666667)).unwrap();
        assert_eq!(
            range,
            PriceRange::Bounded { min: dec!(0.003333), max: dec!(0.01) }
        );
    }

    #[test]
    fn test_rejects_non_positive_price() {
        assert!(matches!(PriceRange::around(dec!(0)), Err(QuoteError::InvalidInput(_))));
        assert!(matches!(PriceRange::around(dec!(-2)), Err(QuoteError::InvalidInput(_))));
    }

    #[test]
    fn test_price_too_small_for_display_precision() {
        // Both bounds round to zero
        assert!(PriceRange::around(dec!(0.0000001)).is_err());
    }

    #[test]
    fn test_edited_bounds_validated() {
        assert!(PriceRange::bounded(dec!(1), dec!(2)).is_ok());
        assert!(PriceRange::bounded(dec!(0), dec!(2)).is_ok());
        assert!(PriceRange::bounded(dec!(2), dec!(2)).is_err());
        assert!(PriceRange::bounded(dec!(-1), dec!(2)).is_err());
    }

    #[test]
    fn test_full_range() {
        let range = PriceRange::for_new_pool(dec!(150), true).unwrap();
        assert!(range.is_full());
        assert!(range.contains(dec!(1000000)));

        let range = PriceRange::for_new_pool(dec!(150), false).unwrap();
        assert!(!range.is_full());
    }
}
