//! Error taxonomy for pricing calculations

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// Caller supplied a non-numeric, non-finite, negative or out-of-range value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A reserve is zero, so no price is defined for the pool
    #[error("Pool not initialized: no liquidity")]
    NoLiquidity,

    #[error("Invalid fee rate: {0}")]
    InvalidFee(String),

    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A result rounds past the 28 fractional digits `Decimal` can carry
    #[error("Result below Decimal precision in {0}")]
    Precision(&'static str),
}

impl QuoteError {
    /// True when the pool has no liquidity rather than the input being bad
    pub fn is_no_liquidity(&self) -> bool {
        matches!(self, QuoteError::NoLiquidity)
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        QuoteError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
