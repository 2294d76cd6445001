//! Trading fee rate and the fee tiers offered at pool creation

use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Swap fee applied to every quote unless configured otherwise (0.3%)
pub const DEFAULT_SWAP_FEE_BPS: u32 = 30;

const BPS_DENOMINATOR: u32 = 10_000;

/// Fee as a fraction of gross output, always in `[0, 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct FeeRate(Decimal);

impl FeeRate {
    pub const ZERO: FeeRate = FeeRate(Decimal::ZERO);

    pub fn new(fraction: Decimal) -> Result<Self> {
        if fraction.is_sign_negative() && !fraction.is_zero() {
            return Err(QuoteError::InvalidFee(format!("{} is negative", fraction)));
        }
        if fraction >= Decimal::ONE {
            return Err(QuoteError::InvalidFee(format!("{} must be below 1", fraction)));
        }
        Ok(Self(fraction))
    }

    /// Fee in basis points (30 = 0.3%)
    pub fn from_bps(bps: u32) -> Result<Self> {
        if bps >= BPS_DENOMINATOR {
            return Err(QuoteError::InvalidFee(format!("{} bps must be below 10000", bps)));
        }
        Ok(Self(Decimal::from(bps) / Decimal::from(BPS_DENOMINATOR)))
    }

    pub fn fraction(&self) -> Decimal {
        self.0
    }

    pub fn percent(&self) -> Decimal {
        self.0 * dec!(100)
    }

    /// `1 - fee`, the share of gross output the trader keeps
    pub fn retained(&self) -> Decimal {
        Decimal::ONE - self.0
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self(Decimal::from(DEFAULT_SWAP_FEE_BPS) / Decimal::from(BPS_DENOMINATOR))
    }
}

impl TryFrom<Decimal> for FeeRate {
    type Error = QuoteError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FeeRate> for Decimal {
    fn from(fee: FeeRate) -> Self {
        fee.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent().normalize())
    }
}

/// Fee tier a pool can be created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeTier {
    pub bps: u32,
    pub label: &'static str,
    pub description: &'static str,
}

impl FeeTier {
    pub const STABLE: FeeTier = FeeTier {
        bps: 1,
        label: "0.01%",
        description: "Best for very stable assets",
    };
    pub const PEGGED: FeeTier = FeeTier {
        bps: 5,
        label: "0.05%",
        description: "Best for pegged-assets and high volume pairs",
    };
    pub const STANDARD: FeeTier = FeeTier {
        bps: 25,
        label: "0.25%",
        description: "Best for most pairs",
    };
    pub const EXOTIC: FeeTier = FeeTier {
        bps: 100,
        label: "1.00%",
        description: "Best for exotic pairs",
    };

    pub const ALL: [FeeTier; 4] = [Self::STABLE, Self::PEGGED, Self::STANDARD, Self::EXOTIC];

    pub fn fee_rate(&self) -> FeeRate {
        // Tier bps are all far below the denominator
        FeeRate(Decimal::from(self.bps) / Decimal::from(BPS_DENOMINATOR))
    }

    pub fn from_bps(bps: u32) -> Option<FeeTier> {
        Self::ALL.iter().copied().find(|tier| tier.bps == bps)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::STANDARD
    }
}
