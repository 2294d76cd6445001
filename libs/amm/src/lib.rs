//! # Swapdesk AMM Library - Constant Product Pricing Engine
//!
//! ## Purpose
//!
//! Pure pricing calculator for constant product (x*y=k) liquidity pools.
//! Given a pool's reserves and a trade intent it produces the expected
//! output, execution price, price impact and the slippage-bounded minimum
//! output that guards the on-chain swap instruction.
//!
//! ## Integration Points
//!
//! - **Input Sources**: Pool reserves scaled to human units (see `swapdesk-types`),
//!   user-entered amounts and slippage tolerance
//! - **Output Destinations**: Quote displays, the swap instruction's `min_amount_out`,
//!   default price ranges for new pools
//! - **Configuration**: Fee rate, impact threshold and slippage warning bounds
//!   passed explicitly through [`PricingParams`]
//! - **Precision**: `Decimal` arithmetic with checked operations; degenerate
//!   pools become [`QuoteError`] values, never NaN or infinity
//!
//! ## Architecture Role
//!
//! Every swap or pool screen calls into this crate instead of carrying its
//! own copy of the formula. All functions are synchronous, stateless and
//! deterministic, so they are safe to call on every keystroke from any
//! thread.
//!
//! See [`architecture_diagram()`] for visual representation of the data flow.
//!
//! ## Quick Start
//!
//! ```rust
//! use swapdesk_amm::{dec, quote_swap, minimum_out, FeeRate};
//!
//! let quote = quote_swap(dec!(1000), dec!(2000), dec!(10), FeeRate::default()).unwrap();
//! assert!(quote.price_impact_pct < dec!(5));
//!
//! let guard = minimum_out(quote.amount_out, dec!(0.5)).unwrap();
//! assert!(guard < quote.amount_out);
//! ```

pub mod display;
pub mod error;
pub mod fee;
pub mod pool_traits;
pub mod pricing;
pub mod quoter;
pub mod range;
pub mod slippage;
pub mod stats;

pub use display::{format_price, mid_price};
pub use error::{QuoteError, Result};
pub use fee::{FeeRate, FeeTier, DEFAULT_SWAP_FEE_BPS};
pub use pool_traits::{AmmPool, PoolSnapshot, SwapDirection};
pub use pricing::{
    amount_from_f64, is_high_impact, minimum_out, parse_amount, quote_swap, ReservePair,
    SwapQuote, DEFAULT_HIGH_IMPACT_THRESHOLD_PCT,
};
pub use quoter::{PricingParams, QuoteSummary, SwapQuoter};
pub use range::PriceRange;
pub use slippage::{SlippageTolerance, SlippageWarning};
pub use stats::PoolStats;

/// Common types for AMM calculations
pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Architecture diagram showing pricing data flow
#[cfg_attr(doc, aquamarine::aquamarine)]
/// ```mermaid
/// graph LR
///     subgraph Input["📊 Input Layer"]
///         RR[Raw Reserves]
///         TD[Token Decimals]
///         UA[User Amount]
///         ST[Slippage Tolerance]
///     end
///
///     subgraph Math["🧮 Pricing"]
///         SC[Unit Scaling]
///         CP[Constant Product]
///         FE[Fee]
///         PI[Price Impact]
///     end
///
///     subgraph Output["🎯 Swap Decision"]
///         AO[Amount Out]
///         MO[Minimum Out]
///         HW[Impact Warning]
///     end
///
///     RR --> SC
///     TD --> SC
///     SC --> CP
///     UA --> CP
///     CP --> FE
///     FE --> AO
///     FE --> PI
///     PI --> HW
///     AO --> MO
///     ST --> MO
///
///     style Input fill:#e1f5fe
///     style Math fill:#fff3e0
///     style Output fill:#e8f5e9
/// ```
pub fn architecture_diagram() {
    // This function exists solely for documentation purposes
    // The diagram is rendered by aquamarine in rustdoc
}
