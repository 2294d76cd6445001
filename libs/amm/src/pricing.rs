//! Constant product (x*y=k) swap pricing
//!
//! Quotes are computed on human-readable (decimal-adjusted) reserves using
//! `Decimal` with checked arithmetic, so a degenerate pool surfaces as a
//! typed error instead of a NaN or infinity leaking into the caller.

use crate::error::{QuoteError, Result};
use crate::fee::FeeRate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;

/// Price impact above which a trade is flagged (percent)
pub const DEFAULT_HIGH_IMPACT_THRESHOLD_PCT: Decimal = dec!(5);

/// Reserves oriented for a single swap: input side first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReservePair {
    pub reserve_in: Decimal,
    pub reserve_out: Decimal,
}

impl ReservePair {
    /// Validated pair; a zero reserve means the pool holds no liquidity
    pub fn new(reserve_in: Decimal, reserve_out: Decimal) -> Result<Self> {
        check_reserve(reserve_in, "reserve_in")?;
        check_reserve(reserve_out, "reserve_out")?;
        Ok(Self {
            reserve_in,
            reserve_out,
        })
    }

    pub fn reversed(&self) -> Self {
        Self {
            reserve_in: self.reserve_out,
            reserve_out: self.reserve_in,
        }
    }

    /// Pre-trade mid price in output units per input unit
    pub fn mid_price(&self) -> Result<Decimal> {
        self.reserve_out
            .checked_div(self.reserve_in)
            .ok_or(QuoteError::NoLiquidity)
    }

    pub fn quote(&self, amount_in: Decimal, fee: FeeRate) -> Result<SwapQuote> {
        quote_swap(self.reserve_in, self.reserve_out, amount_in, fee)
    }
}

/// Result of pricing one swap against a reserve pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwapQuote {
    pub amount_in: Decimal,
    /// Output before the fee is taken
    pub gross_out: Decimal,
    /// Output the trader receives
    pub amount_out: Decimal,
    pub fee_paid: Decimal,
    /// Pre-trade mid price (`reserve_out / reserve_in`)
    pub expected_price: Decimal,
    /// Realized price (`amount_out / amount_in`), zero for an empty trade
    pub execution_price: Decimal,
    pub price_impact_pct: Decimal,
}

impl SwapQuote {
    pub fn is_high_impact(&self, threshold_pct: Decimal) -> bool {
        is_high_impact(self.price_impact_pct, threshold_pct)
    }
}

/// Quote a swap of `amount_in` against a constant product pool
///
/// The pre-fee output is `reserve_out * amount_in / (reserve_in + amount_in)`,
/// the same value `reserve_out - k / (reserve_in + amount_in)` gives, but
/// without subtracting two nearly equal reserves.
///
/// # Arguments
/// * `reserve_in` - Input token reserve (human units, > 0)
/// * `reserve_out` - Output token reserve (human units, > 0)
/// * `amount_in` - Input amount (human units, >= 0)
/// * `fee` - Fee taken from gross output
///
/// # Errors
/// `NoLiquidity` for a zero reserve, `InvalidInput` for negative values,
/// `Overflow` if an intermediate leaves the `Decimal` range, `Precision` if
/// the price or output cannot be told apart from its bound at 28 digits.
pub fn quote_swap(
    reserve_in: Decimal,
    reserve_out: Decimal,
    amount_in: Decimal,
    fee: FeeRate,
) -> Result<SwapQuote> {
    check_reserve(reserve_in, "reserve_in")?;
    check_reserve(reserve_out, "reserve_out")?;
    check_non_negative(amount_in, "amount_in")?;

    let expected_price = reserve_out
        .checked_div(reserve_in)
        .ok_or(QuoteError::Overflow("expected price"))?;
    if expected_price.is_zero() {
        return Err(QuoteError::Precision("expected price"));
    }

    if amount_in.is_zero() {
        return Ok(SwapQuote {
            amount_in,
            gross_out: Decimal::ZERO,
            amount_out: Decimal::ZERO,
            fee_paid: Decimal::ZERO,
            expected_price,
            execution_price: Decimal::ZERO,
            price_impact_pct: Decimal::ZERO,
        });
    }

    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(QuoteError::Overflow("new input reserve"))?;

    // Multiply first to keep dust inputs representable; divide first when
    // the product leaves the range
    let gross_out = reserve_out
        .checked_mul(amount_in)
        .and_then(|product| product.checked_div(new_reserve_in))
        .or_else(|| {
            amount_in
                .checked_div(new_reserve_in)
                .and_then(|share| share.checked_mul(reserve_out))
        })
        .ok_or(QuoteError::Overflow("gross output"))?;
    if gross_out >= reserve_out {
        return Err(QuoteError::Precision("gross output"));
    }

    let amount_out = gross_out
        .checked_mul(fee.retained())
        .ok_or(QuoteError::Overflow("fee application"))?;
    let fee_paid = gross_out - amount_out;

    // amount_out / amount_in, taken from the reserves so dust trades keep
    // full precision
    let execution_price = reserve_out
        .checked_div(new_reserve_in)
        .and_then(|price| price.checked_mul(fee.retained()))
        .ok_or(QuoteError::Overflow("execution price"))?;
    let price_impact_pct = (execution_price - expected_price)
        .abs()
        .checked_div(expected_price)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(QuoteError::Overflow("price impact"))?;

    Ok(SwapQuote {
        amount_in,
        gross_out,
        amount_out,
        fee_paid,
        expected_price,
        execution_price,
        price_impact_pct,
    })
}

/// Smallest acceptable output under `slippage_pct` tolerance
///
/// Feeds the swap instruction's slippage guard. Does not alter the quote.
pub fn minimum_out(amount_out: Decimal, slippage_pct: Decimal) -> Result<Decimal> {
    check_non_negative(amount_out, "amount_out")?;
    if (slippage_pct.is_sign_negative() && !slippage_pct.is_zero()) || slippage_pct > dec!(100) {
        return Err(QuoteError::invalid(format!(
            "slippage {}% outside 0..=100",
            slippage_pct
        )));
    }

    amount_out
        .checked_mul(Decimal::ONE - slippage_pct / dec!(100))
        .ok_or(QuoteError::Overflow("minimum output"))
}

/// True when `price_impact_pct` strictly exceeds `threshold_pct`
pub fn is_high_impact(price_impact_pct: Decimal, threshold_pct: Decimal) -> bool {
    price_impact_pct > threshold_pct
}

/// Parse a user-entered amount; rejects non-numeric and negative input
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| QuoteError::invalid(format!("'{}' is not a number", input)))?;
    check_non_negative(amount, "amount")?;
    Ok(amount)
}

/// Convert a float from an external source, rejecting NaN and infinities
pub fn amount_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(QuoteError::invalid(format!("{} is not finite", value)));
    }
    let amount = Decimal::from_f64(value)
        .ok_or_else(|| QuoteError::invalid(format!("{} is out of range", value)))?;
    check_non_negative(amount, "amount")?;
    Ok(amount)
}

fn check_reserve(reserve: Decimal, name: &str) -> Result<()> {
    check_non_negative(reserve, name)?;
    if reserve.is_zero() {
        return Err(QuoteError::NoLiquidity);
    }
    Ok(())
}

fn check_non_negative(value: Decimal, name: &str) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(QuoteError::invalid(format!("{} must not be negative: {}", name, value)));
    }
    Ok(())
}
