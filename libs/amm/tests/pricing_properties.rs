//! Constant Product Pricing Property Tests
//!
//! These tests validate mathematical properties that must always hold
//! for swap quotes, regardless of specific pool conditions.

use proptest::prelude::*;
use swapdesk_amm::{
    dec, is_high_impact, minimum_out, quote_swap, Decimal, FeeRate, PoolSnapshot,
    QuoteError, SlippageTolerance, SwapDirection, SwapQuoter, DEFAULT_HIGH_IMPACT_THRESHOLD_PCT,
};
use swapdesk_types::{TokenAmount, MAX_DECIMALS};

// Property test strategies
prop_compose! {
    fn valid_reserve()
        (units in 1u64..1_000_000_000u64, scale in 0u32..4u32) -> Decimal {
        Decimal::new(units as i64, scale).max(dec!(0.001))
    }
}

prop_compose! {
    fn valid_amount_in()
        (units in 1u64..1_000_000_000u64, scale in 0u32..4u32) -> Decimal {
        Decimal::new(units as i64, scale)
    }
}

// On-chain balance at any supported precision
prop_compose! {
    fn raw_scaled_amount()
        (raw in 1u64..=u64::MAX, decimals in 0u8..=MAX_DECIMALS) -> Decimal {
        TokenAmount::new(raw, decimals).unwrap().to_decimal()
    }
}

// At least one whole token, up to a full u64 of base units
prop_compose! {
    fn deep_reserve()
        (decimals in 0u8..=18u8)
        (raw in 10u64.pow(decimals as u32)..=u64::MAX, decimals in Just(decimals)) -> Decimal {
        TokenAmount::new(raw, decimals).unwrap().to_decimal()
    }
}

// Far below one base unit of any listed token
prop_compose! {
    fn dust_amount()
        (raw in 1u64..=u32::MAX as u64, decimals in 20u8..=MAX_DECIMALS) -> Decimal {
        TokenAmount::new(raw, decimals).unwrap().to_decimal()
    }
}

prop_compose! {
    fn valid_fee()
        (fee_bps in 0u32..1000u32) -> FeeRate {
        FeeRate::from_bps(fee_bps).unwrap()
    }
}

prop_compose! {
    fn valid_slippage()
        (slippage_bps in 0u32..=10_000u32) -> Decimal {
        Decimal::from(slippage_bps) / dec!(100)
    }
}

fn within_relative(actual: Decimal, expected: Decimal, tolerance: Decimal) -> bool {
    (actual - expected).abs() <= expected.abs() * tolerance
}

proptest! {
    /// Property: the reserve product is preserved by the pre-fee output
    #[test]
    fn constant_product_invariant_holds(
        reserve_in in valid_reserve(),
        reserve_out in valid_reserve(),
        amount_in in valid_amount_in(),
        fee in valid_fee(),
    ) {
        let quote = quote_swap(reserve_in, reserve_out, amount_in, fee).unwrap();
        let k = reserve_in * reserve_out;
        let after = (reserve_in + amount_in) * (reserve_out - quote.gross_out);

        prop_assert!(within_relative(after, k, dec!(0.000000000001)),
                    "k drifted: before {} after {}", k, after);
    }

    /// Property: a higher fee never yields more output
    #[test]
    fn higher_fee_never_increases_output(
        reserve_in in valid_reserve(),
        reserve_out in valid_reserve(),
        amount_in in valid_amount_in(),
        fee_low in 0u32..500u32,
        fee_extra in 0u32..500u32,
    ) {
        let low = FeeRate::from_bps(fee_low).unwrap();
        let high = FeeRate::from_bps(fee_low + fee_extra).unwrap();

        let out_low = quote_swap(reserve_in, reserve_out, amount_in, low).unwrap().amount_out;
        let out_high = quote_swap(reserve_in, reserve_out, amount_in, high).unwrap().amount_out;

        prop_assert!(out_high <= out_low,
                    "fee {} gave {} but fee {} gave {}", high, out_high, low, out_low);
    }

    /// Property: swapping nothing returns nothing
    #[test]
    fn zero_input_yields_zero_output(
        reserve_in in valid_reserve(),
        reserve_out in valid_reserve(),
        fee in valid_fee(),
    ) {
        let quote = quote_swap(reserve_in, reserve_out, Decimal::ZERO, fee).unwrap();
        prop_assert_eq!(quote.amount_out, Decimal::ZERO);
        prop_assert!(!is_high_impact(quote.price_impact_pct, DEFAULT_HIGH_IMPACT_THRESHOLD_PCT));
    }

    /// Property: output can never drain the output reserve
    #[test]
    fn output_strictly_below_reserve(
        reserve_in in valid_reserve(),
        reserve_out in valid_reserve(),
        amount_in in valid_amount_in(),
        fee in valid_fee(),
    ) {
        let quote = quote_swap(reserve_in, reserve_out, amount_in, fee).unwrap();
        prop_assert!(quote.amount_out >= Decimal::ZERO);
        prop_assert!(quote.amount_out < reserve_out,
                    "output {} reached reserve {}", quote.amount_out, reserve_out);
    }

    /// Property: rounding never pushes output negative or past the reserve
    #[test]
    fn output_bounded_at_any_precision(
        reserve_in in raw_scaled_amount(),
        reserve_out in raw_scaled_amount(),
        amount_in in raw_scaled_amount(),
        fee in valid_fee(),
    ) {
        match quote_swap(reserve_in, reserve_out, amount_in, fee) {
            Ok(quote) => {
                prop_assert!(quote.amount_out >= Decimal::ZERO,
                            "negative output {} for {} in", quote.amount_out, amount_in);
                prop_assert!(quote.amount_out < reserve_out,
                            "output {} reached reserve {}", quote.amount_out, reserve_out);
                prop_assert!(quote.price_impact_pct >= Decimal::ZERO);
            }
            Err(err) => prop_assert!(
                matches!(err, QuoteError::Overflow(_) | QuoteError::Precision(_)),
                "unexpected error {:?}", err
            ),
        }
    }

    /// Property: a dust trade against a deep pool costs about the fee, nothing more
    #[test]
    fn dust_trade_is_not_high_impact(
        reserve_in in deep_reserve(),
        reserve_out in deep_reserve(),
        amount_in in dust_amount(),
        fee_bps in 0u32..=400u32,
    ) {
        let fee = FeeRate::from_bps(fee_bps).unwrap();
        let quote = quote_swap(reserve_in, reserve_out, amount_in, fee).unwrap();

        prop_assert!(quote.amount_out >= Decimal::ZERO);
        prop_assert!(quote.amount_out < reserve_out);
        prop_assert!(!is_high_impact(quote.price_impact_pct, DEFAULT_HIGH_IMPACT_THRESHOLD_PCT),
                    "dust {} against {}/{} flagged at {}%",
                    amount_in, reserve_in, reserve_out, quote.price_impact_pct);
    }

    /// Property: the slippage guard never exceeds the quote and shrinks with tolerance
    #[test]
    fn minimum_out_bounded_by_quote(
        amount_out in valid_amount_in(),
        slippage in valid_slippage(),
    ) {
        let guard = minimum_out(amount_out, slippage).unwrap();
        prop_assert!(guard <= amount_out);
        prop_assert!(guard >= Decimal::ZERO);
    }

    /// Property: quoting B->A on a pool equals quoting A->B on the mirrored pool
    #[test]
    fn direction_is_mirror_symmetric(
        reserve_a in valid_reserve(),
        reserve_b in valid_reserve(),
        amount_in in valid_amount_in(),
        fee in valid_fee(),
    ) {
        let quoter = SwapQuoter::default();
        let pool = PoolSnapshot::new(reserve_a, reserve_b, fee);
        let mirrored = PoolSnapshot::new(reserve_b, reserve_a, fee);

        let b_to_a = quoter
            .quote(&pool, SwapDirection::BtoA, amount_in, SlippageTolerance::default())
            .unwrap();
        let a_to_b = quoter
            .quote(&mirrored, SwapDirection::AtoB, amount_in, SlippageTolerance::default())
            .unwrap();

        prop_assert_eq!(b_to_a.quote, a_to_b.quote);
    }
}

#[test]
fn slippage_guard_literals() {
    assert_eq!(minimum_out(dec!(100), dec!(0.5)).unwrap(), dec!(99.5));
    assert_eq!(minimum_out(dec!(100), dec!(0)).unwrap(), dec!(100));
}

#[test]
fn reference_pool_scenario() {
    let quote = quote_swap(dec!(1000), dec!(2000), dec!(10), FeeRate::default()).unwrap();

    assert!((quote.amount_out - dec!(19.742)).abs() < dec!(0.001));
    assert_eq!(quote.expected_price, dec!(2.0));
    assert!((quote.execution_price - dec!(1.974)).abs() < dec!(0.001));
    assert!((quote.price_impact_pct - dec!(1.28)).abs() < dec!(0.01));
    assert!(!is_high_impact(quote.price_impact_pct, DEFAULT_HIGH_IMPACT_THRESHOLD_PCT));
}

#[test]
fn half_reserve_trade_is_high_impact() {
    let reserve_in = dec!(1000);
    let quote = quote_swap(reserve_in, dec!(2000), reserve_in / dec!(2), FeeRate::default()).unwrap();
    assert!(is_high_impact(quote.price_impact_pct, DEFAULT_HIGH_IMPACT_THRESHOLD_PCT));
}

#[test]
fn summary_serializes_decimals_as_strings() {
    let pool = PoolSnapshot::new(dec!(1000), dec!(2000), FeeRate::default());
    let summary = SwapQuoter::default()
        .quote(&pool, SwapDirection::AtoB, dec!(10), SlippageTolerance::default())
        .unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["direction"], "AtoB");
    assert_eq!(json["slippage"], "0.5");
    assert_eq!(json["high_impact"], false);
    assert!(json["slippage_warning"].is_null());
    assert!(json["quote"]["amount_out"].as_str().unwrap().starts_with("19.74"));
}
