//! Pool-level statistics: value locked, fee revenue and yield

use crate::error::{QuoteError, Result};
use crate::fee::FeeRate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

const DAYS_PER_YEAR: Decimal = dec!(365);

/// Quote-currency valuation of a pool and its trailing day of activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub tvl: Decimal,
    pub volume_24h: Decimal,
    pub fees_24h: Decimal,
    /// Fee revenue annualized over TVL, in percent
    pub apr_pct: Decimal,
}

impl PoolStats {
    /// # Arguments
    /// * `reserves` - (token A, token B) in human units
    /// * `prices` - quote-currency price of one unit of (token A, token B)
    /// * `volume_24h` - traded volume in the quote currency
    /// * `fee` - fee charged on that volume
    pub fn compute(
        reserves: (Decimal, Decimal),
        prices: (Decimal, Decimal),
        volume_24h: Decimal,
        fee: FeeRate,
    ) -> Result<Self> {
        for value in [reserves.0, reserves.1, prices.0, prices.1, volume_24h] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(QuoteError::InvalidInput(format!(
                    "pool statistic input must not be negative: {}",
                    value
                )));
            }
        }

        let tvl = reserves
            .0
            .checked_mul(prices.0)
            .zip(reserves.1.checked_mul(prices.1))
            .and_then(|(a, b)| a.checked_add(b))
            .ok_or(QuoteError::Overflow("total value locked"))?;
        if tvl.is_zero() {
            return Err(QuoteError::NoLiquidity);
        }

        let fees_24h = volume_24h
            .checked_mul(fee.fraction())
            .ok_or(QuoteError::Overflow("daily fees"))?;
        let apr_pct = fees_24h
            .checked_mul(DAYS_PER_YEAR * dec!(100))
            .and_then(|annual| annual.checked_div(tvl))
            .ok_or(QuoteError::Overflow("annual yield"))?;

        Ok(Self {
            tvl,
            volume_24h,
            fees_24h,
            apr_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sol_usdc_pool() {
        // 100 SOL at $100 plus 10_000 USDC, $5_000 daily volume
        let stats = PoolStats::compute(
            (dec!(100), dec!(10000)),
            (dec!(100), dec!(1)),
            dec!(5000),
            FeeRate::default(),
        )
        .unwrap();

        assert_eq!(stats.tvl, dec!(20000));
        assert_eq!(stats.fees_24h, dec!(15));
        assert_eq!(stats.apr_pct, dec!(27.375));
    }

    #[test]
    fn test_empty_pool() {
        let result = PoolStats::compute(
            (dec!(0), dec!(0)),
            (dec!(100), dec!(1)),
            dec!(5000),
            FeeRate::default(),
        );
        assert_eq!(result, Err(QuoteError::NoLiquidity));
    }

    #[test]
    fn test_negative_volume_rejected() {
        let result = PoolStats::compute(
            (dec!(1), dec!(1)),
            (dec!(1), dec!(1)),
            dec!(-1),
            FeeRate::default(),
        );
        assert!(matches!(result, Err(QuoteError::InvalidInput(_))));
    }
}
