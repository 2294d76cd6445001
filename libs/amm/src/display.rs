//! Rate display helpers

use crate::error::Result;
use crate::pool_traits::{AmmPool, SwapDirection};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Units of the output token received per unit of the input token
pub fn mid_price<P: AmmPool>(pool: &P, direction: SwapDirection) -> Result<Decimal> {
    pool.oriented(direction)?.mid_price()
}

/// Format a price with precision scaled to its magnitude
///
/// Tiny prices use exponent notation, large ones are rounded to whole
/// units with thousands separators.
pub fn format_price(price: Decimal) -> String {
    if price < dec!(0.0001) {
        let value = price.to_f64().unwrap_or(0.0);
        return format!("{:.4e}", value);
    }
    if price < dec!(0.01) {
        return fixed(price, 6);
    }
    if price < dec!(1) {
        return fixed(price, 4);
    }
    if price < dec!(1000) {
        return fixed(price, 2);
    }
    group_thousands(&fixed(price, 0))
}

fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
