//! # Swapdesk Configuration
//!
//! Configuration loading and defaults for the pricing calculator and the
//! tools built on it, so fee, impact and slippage parameters are never
//! hard-coded at call sites.
//!
//! ## Features
//!
//! - **Pricing Parameters**: Swap fee, price impact threshold, slippage defaults
//! - **Token Registry**: Symbols, mints and decimals used for unit scaling
//! - **Layered Loading**: Base TOML, environment overlay, `SWAPDESK__*` variables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use swapdesk_config::load_config;
//!
//! let config = load_config(Some("config/swapdesk.toml"), Some("devnet")).unwrap();
//! let params = config.pricing.to_params().unwrap();
//! let sol = config.token("SOL").expect("SOL configured");
//! ```

pub mod defaults;
pub mod pricing_config;

// Re-export commonly used types
pub use pricing_config::{load_config, PricingConfig, SwapdeskConfig};
