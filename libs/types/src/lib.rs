//! # Swapdesk Types
//!
//! Shared token types for the Swapdesk pricing workspace.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: raw balances are scaled into `Decimal` exactly
//! - **Explicit Boundaries**: conversions between raw on-chain integers and
//!   human-readable units happen only through [`precision`]
//! - **Type Safety**: a [`TokenAmount`](precision::TokenAmount) always carries
//!   its decimals, so amounts of different tokens are never mixed silently
//!
//! ## Quick Start
//!
//! ```rust
//! use swapdesk_types::TokenInfo;
//!
//! let usdc = TokenInfo::new("USDC", "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", 6).unwrap();
//! let reserve = usdc.to_human(2_500_000).unwrap(); // 2.5 USDC
//! assert_eq!(reserve.to_string(), "2.5");
//! ```

pub mod precision;

pub use precision::{PrecisionError, TokenAmount, TokenInfo, MAX_DECIMALS};
