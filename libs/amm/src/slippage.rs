//! Slippage tolerance and the warnings shown for unusual settings

use crate::error::{QuoteError, Result};
use crate::pricing;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quick-pick tolerances (percent)
pub const PRESETS: [Decimal; 4] = [dec!(0.1), dec!(0.5), dec!(1.0), dec!(3.0)];

/// Above this tolerance the trade is an easy frontrunning target (percent)
pub const DEFAULT_WARN_HIGH_PCT: Decimal = dec!(5);

/// Below this (non-zero) tolerance ordinary price movement fails the trade (percent)
pub const DEFAULT_WARN_LOW_PCT: Decimal = dec!(0.1);

/// Maximum acceptable deviation from the quoted output, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct SlippageTolerance(Decimal);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlippageWarning {
    /// Tolerance is so wide the transaction may be frontrun
    FrontrunRisk,
    /// Tolerance is so tight the transaction may fail on normal price movement
    MayFail,
}

impl SlippageTolerance {
    pub fn new(pct: Decimal) -> Result<Self> {
        if (pct.is_sign_negative() && !pct.is_zero()) || pct > dec!(100) {
            return Err(QuoteError::InvalidInput(format!(
                "slippage {}% outside 0..=100",
                pct
            )));
        }
        Ok(Self(pct))
    }

    pub fn from_bps(bps: u32) -> Result<Self> {
        Self::new(Decimal::from(bps) / dec!(100))
    }

    pub fn pct(&self) -> Decimal {
        self.0
    }

    /// Minimum output guard for a quoted `amount_out`
    pub fn minimum_out(&self, amount_out: Decimal) -> Result<Decimal> {
        pricing::minimum_out(amount_out, self.0)
    }

    /// Warning for a tolerance outside `(low_pct, high_pct]`; zero never warns
    pub fn warning(&self, low_pct: Decimal, high_pct: Decimal) -> Option<SlippageWarning> {
        if self.0 > high_pct {
            Some(SlippageWarning::FrontrunRisk)
        } else if self.0 > Decimal::ZERO && self.0 < low_pct {
            Some(SlippageWarning::MayFail)
        } else {
            None
        }
    }
}

impl Default for SlippageTolerance {
    fn default() -> Self {
        Self(dec!(0.5))
    }
}

impl TryFrom<Decimal> for SlippageTolerance {
    type Error = QuoteError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SlippageTolerance> for Decimal {
    fn from(tolerance: SlippageTolerance) -> Self {
        tolerance.0
    }
}

impl fmt::Display for SlippageTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

impl fmt::Display for SlippageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlippageWarning::FrontrunRisk => {
                write!(f, "Your transaction may be frontrun and result in an unfavorable trade.")
            }
            SlippageWarning::MayFail => {
                write!(f, "Your transaction may fail due to price movements.")
            }
        }
    }
}
