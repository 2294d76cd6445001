//! Default configuration values
//!
//! Used when neither the config file nor the environment sets a value.

/// Pricing defaults, in basis points
pub mod pricing {
    /// Swap fee (0.3%)
    pub const SWAP_FEE_BPS: u32 = 30;

    /// Price impact warning threshold (5%)
    pub const HIGH_IMPACT_THRESHOLD_BPS: u32 = 500;

    /// Slippage tolerance preselected for new swaps (0.5%)
    pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;

    /// Non-zero tolerances below this may fail (0.1%)
    pub const SLIPPAGE_WARN_LOW_BPS: u32 = 10;

    /// Tolerances above this invite frontrunning (5%)
    pub const SLIPPAGE_WARN_HIGH_BPS: u32 = 500;
}

/// Known tokens as (symbol, mint, decimals)
pub mod tokens {
    pub const SOL: (&str, &str, u8) = ("SOL", "So11111111111111111111111111111111111111112", 9);
    pub const USDC: (&str, &str, u8) = ("USDC", "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", 6);
    pub const USDT: (&str, &str, u8) = ("USDT", "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", 6);
    pub const BONK: (&str, &str, u8) = ("BONK", "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", 5);

    pub const ALL: [(&str, &str, u8); 4] = [SOL, USDC, USDT, BONK];
}

/// File locations and environment prefix
pub mod paths {
    pub const BASE_CONFIG: &str = "config/swapdesk.toml";
    pub const ENVIRONMENTS_DIR: &str = "config/environments";
    pub const ENV_PREFIX: &str = "SWAPDESK";
}
