//! Token Precision and Unit Scaling
//!
//! Pool balances arrive from the chain as raw integer amounts plus a
//! decimals count. Pricing works in human-readable units, and instruction
//! parameters go back out as raw integers. This module owns both
//! conversions so the scaling rules live in one place.
//!
//! ## Precision Rules
//!
//! 1. **Raw -> human is exact**: `1_500_000_000` lamports with 9 decimals is
//!    exactly `1.5`, never an approximation.
//! 2. **Human -> raw floors toward zero**: fractional smallest units are
//!    dropped, matching what the swap instruction can carry.
//! 3. **Decimals are bounded**: at most [`MAX_DECIMALS`] places, the
//!    largest scale `Decimal` can represent.
//!
//! ## Example Usage
//!
//! ```rust
//! use swapdesk_types::precision::TokenAmount;
//! use rust_decimal_macros::dec;
//!
//! let lamports = TokenAmount::new(1_500_000_000, 9).unwrap();
//! assert_eq!(lamports.to_decimal(), dec!(1.5));
//!
//! let usdc = TokenAmount::from_decimal(dec!(19.7425749), 6).unwrap();
//! assert_eq!(usdc.raw, 19_742_574);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Largest decimals count a `Decimal` scale can hold
pub const MAX_DECIMALS: u8 = 28;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrecisionError {
    #[error("Unsupported decimals: {0} (max 28)")]
    UnsupportedDecimals(u8),

    #[error("Negative amount: {0}")]
    NegativeAmount(Decimal),

    #[error("Value overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, PrecisionError>;

/// Token metadata needed for unit scaling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    /// Base58 mint address
    pub mint: String,
    pub decimals: u8,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>, mint: impl Into<String>, decimals: u8) -> Result<Self> {
        check_decimals(decimals)?;
        Ok(Self {
            symbol: symbol.into(),
            mint: mint.into(),
            decimals,
        })
    }

    /// Scale a raw on-chain balance of this token into human units
    pub fn to_human(&self, raw: u64) -> Result<Decimal> {
        Ok(TokenAmount::new(raw, self.decimals)?.to_decimal())
    }

    /// Scale a human amount of this token into raw units (floored)
    pub fn to_raw(&self, amount: Decimal) -> Result<u64> {
        Ok(TokenAmount::from_decimal(amount, self.decimals)?.raw)
    }
}

/// Raw token amount with its native precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    /// Amount in smallest units (lamports for SOL, etc.)
    pub raw: u64,
    pub decimals: u8,
}

impl TokenAmount {
    pub fn new(raw: u64, decimals: u8) -> Result<Self> {
        check_decimals(decimals)?;
        Ok(Self { raw, decimals })
    }

    /// Exact human-readable value (`raw / 10^decimals`)
    pub fn to_decimal(&self) -> Decimal {
        let scale = self.decimals.min(MAX_DECIMALS) as u32;
        Decimal::from_i128_with_scale(self.raw as i128, scale).normalize()
    }

    /// Convert a human amount into smallest units, rounding toward zero
    pub fn from_decimal(amount: Decimal, decimals: u8) -> Result<Self> {
        check_decimals(decimals)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PrecisionError::NegativeAmount(amount));
        }

        let scaled = amount
            .checked_mul(decimal_multiplier(decimals))
            .ok_or_else(|| {
                PrecisionError::Overflow(format!("{} with {} decimals", amount, decimals))
            })?
            .trunc();

        let raw = scaled.to_u64().ok_or_else(|| {
            PrecisionError::Overflow(format!("{} does not fit in u64 smallest units", scaled))
        })?;

        Ok(Self { raw, decimals })
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

/// `10^decimals` as a Decimal
pub fn decimal_multiplier(decimals: u8) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(decimals.min(MAX_DECIMALS) as u32), 0)
}

fn check_decimals(decimals: u8) -> Result<()> {
    if decimals > MAX_DECIMALS {
        return Err(PrecisionError::UnsupportedDecimals(decimals));
    }
    Ok(())
}
