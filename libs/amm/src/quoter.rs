//! Swap quoting with explicit pricing parameters
//!
//! Combines the constant product quote, the slippage guard and the
//! impact/slippage warnings into the single summary a front end displays
//! before submitting a swap instruction.

use crate::error::Result;
use crate::fee::FeeRate;
use crate::pool_traits::{AmmPool, SwapDirection};
use crate::pricing::{SwapQuote, DEFAULT_HIGH_IMPACT_THRESHOLD_PCT};
use crate::slippage::{
    SlippageTolerance, SlippageWarning, DEFAULT_WARN_HIGH_PCT, DEFAULT_WARN_LOW_PCT,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// Tunable pricing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingParams {
    /// Fee used when the pool does not dictate one
    pub fee_rate: FeeRate,
    /// Price impact above which a quote is flagged (percent)
    pub high_impact_threshold_pct: Decimal,
    /// Non-zero tolerances below this warn that the swap may fail (percent)
    pub slippage_warn_low_pct: Decimal,
    /// Tolerances above this warn of frontrunning (percent)
    pub slippage_warn_high_pct: Decimal,
}

impl Default for PricingParams {
    fn default() -> Self {
        Self {
            fee_rate: FeeRate::default(),
            high_impact_threshold_pct: DEFAULT_HIGH_IMPACT_THRESHOLD_PCT,
            slippage_warn_low_pct: DEFAULT_WARN_LOW_PCT,
            slippage_warn_high_pct: DEFAULT_WARN_HIGH_PCT,
        }
    }
}

/// Everything needed to show and submit one swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub direction: SwapDirection,
    pub quote: SwapQuote,
    pub slippage: SlippageTolerance,
    /// Slippage guard passed to the swap instruction
    pub minimum_out: Decimal,
    pub high_impact: bool,
    pub slippage_warning: Option<SlippageWarning>,
}

/// Quotes swaps against any [`AmmPool`]
pub struct SwapQuoter {
    params: PricingParams,
}

impl SwapQuoter {
    pub fn new(params: PricingParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PricingParams {
        &self.params
    }

    /// Quote using the pool's own fee
    pub fn quote<P: AmmPool>(
        &self,
        pool: &P,
        direction: SwapDirection,
        amount_in: Decimal,
        slippage: SlippageTolerance,
    ) -> Result<QuoteSummary> {
        self.quote_with_fee(pool, direction, amount_in, slippage, pool.fee_rate())
    }

    /// Quote using the configured fee regardless of the pool's fee
    pub fn quote_configured<P: AmmPool>(
        &self,
        pool: &P,
        direction: SwapDirection,
        amount_in: Decimal,
        slippage: SlippageTolerance,
    ) -> Result<QuoteSummary> {
        self.quote_with_fee(pool, direction, amount_in, slippage, self.params.fee_rate)
    }

    fn quote_with_fee<P: AmmPool>(
        &self,
        pool: &P,
        direction: SwapDirection,
        amount_in: Decimal,
        slippage: SlippageTolerance,
        fee: FeeRate,
    ) -> Result<QuoteSummary> {
        let reserves = pool.oriented(direction)?;
        let quote = reserves.quote(amount_in, fee)?;
        let minimum_out = slippage.minimum_out(quote.amount_out)?;

        let high_impact = quote.is_high_impact(self.params.high_impact_threshold_pct);
        let slippage_warning = slippage.warning(
            self.params.slippage_warn_low_pct,
            self.params.slippage_warn_high_pct,
        );

        debug!(
            ?direction,
            %amount_in,
            amount_out = %quote.amount_out,
            impact_pct = %quote.price_impact_pct,
            %minimum_out,
            "Quoted swap"
        );
        if high_impact {
            warn!(
                impact_pct = %quote.price_impact_pct,
                threshold_pct = %self.params.high_impact_threshold_pct,
                "High price impact"
            );
        }

        Ok(QuoteSummary {
            direction,
            quote,
            slippage,
            minimum_out,
            high_impact,
            slippage_warning,
        })
    }
}

impl Default for SwapQuoter {
    fn default() -> Self {
        Self::new(PricingParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;
    use crate::pool_traits::PoolSnapshot;
    use rust_decimal_macros::dec;

    fn pool() -> PoolSnapshot {
        PoolSnapshot::new(dec!(1000), dec!(2000), FeeRate::default())
    }

    #[test]
    fn test_quote_summary() {
        let quoter = SwapQuoter::default();
        let summary = quoter
            .quote(&pool(), SwapDirection::AtoB, dec!(10), SlippageTolerance::default())
            .unwrap();

        assert!((summary.quote.amount_out - dec!(19.74257)).abs() < dec!(0.00001));
        assert_eq!(summary.minimum_out, summary.quote.amount_out * dec!(0.995));
        assert!(!summary.high_impact);
        assert_eq!(summary.slippage_warning, None);
    }

    #[test]
    fn test_reverse_direction_uses_inverse_reserves() {
        let quoter = SwapQuoter::default();
        let summary = quoter
            .quote(&pool(), SwapDirection::BtoA, dec!(20), SlippageTolerance::default())
            .unwrap();

        assert_eq!(summary.quote.expected_price, dec!(0.5));
        assert!(summary.quote.amount_out < dec!(10));
    }

    #[test]
    fn test_custom_threshold_flags_impact() {
        let quoter = SwapQuoter::new(PricingParams {
            high_impact_threshold_pct: dec!(1),
            ..PricingParams::default()
        });
        let summary = quoter
            .quote(&pool(), SwapDirection::AtoB, dec!(10), SlippageTolerance::default())
            .unwrap();
        assert!(summary.high_impact);
    }

    #[test]
    fn test_configured_fee_overrides_pool_fee() {
        let quoter = SwapQuoter::new(PricingParams {
            fee_rate: FeeRate::ZERO,
            ..PricingParams::default()
        });
        let pool_fee = quoter
            .quote(&pool(), SwapDirection::AtoB, dec!(10), SlippageTolerance::default())
            .unwrap();
        let configured = quoter
            .quote_configured(&pool(), SwapDirection::AtoB, dec!(10), SlippageTolerance::default())
            .unwrap();

        assert_eq!(configured.quote.amount_out, configured.quote.gross_out);
        assert!(configured.quote.amount_out > pool_fee.quote.amount_out);
    }

    #[test]
    fn test_wide_slippage_warns() {
        let summary = SwapQuoter::default()
            .quote(
                &pool(),
                SwapDirection::AtoB,
                dec!(10),
                SlippageTolerance::new(dec!(10)).unwrap(),
            )
            .unwrap();
        assert_eq!(summary.slippage_warning, Some(SlippageWarning::FrontrunRisk));
    }

    #[test]
    fn test_uninitialized_pool() {
        let empty = PoolSnapshot::new(dec!(0), dec!(500), FeeRate::default());
        let err = SwapQuoter::default()
            .quote(&empty, SwapDirection::AtoB, dec!(1), SlippageTolerance::default())
            .unwrap_err();
        assert_eq!(err, QuoteError::NoLiquidity);
    }
}
