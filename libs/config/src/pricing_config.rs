//! Pricing Configuration Module
//!
//! Loads pricing parameters and the token list from TOML files with
//! environment-specific overrides, then `SWAPDESK__*` environment variables
//! (for example `SWAPDESK__PRICING__SWAP_FEE_BPS=25`).

use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swapdesk_amm::{FeeRate, PricingParams, SlippageTolerance};
use swapdesk_types::TokenInfo;
use tracing::{debug, info, warn};

use crate::defaults;

/// Top-level configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SwapdeskConfig {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default = "default_tokens")]
    pub tokens: Vec<TokenInfo>,
}

/// Pricing parameters in basis points
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PricingConfig {
    pub swap_fee_bps: u32,
    pub high_impact_threshold_bps: u32,
    pub default_slippage_bps: u32,
    pub slippage_warn_low_bps: u32,
    pub slippage_warn_high_bps: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            swap_fee_bps: defaults::pricing::SWAP_FEE_BPS,
            high_impact_threshold_bps: defaults::pricing::HIGH_IMPACT_THRESHOLD_BPS,
            default_slippage_bps: defaults::pricing::DEFAULT_SLIPPAGE_BPS,
            slippage_warn_low_bps: defaults::pricing::SLIPPAGE_WARN_LOW_BPS,
            slippage_warn_high_bps: defaults::pricing::SLIPPAGE_WARN_HIGH_BPS,
        }
    }
}

impl Default for SwapdeskConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            tokens: default_tokens(),
        }
    }
}

fn default_tokens() -> Vec<TokenInfo> {
    defaults::tokens::ALL
        .iter()
        .map(|(symbol, mint, decimals)| TokenInfo {
            symbol: symbol.to_string(),
            mint: mint.to_string(),
            decimals: *decimals,
        })
        .collect()
}

fn bps_to_pct(bps: u32) -> Decimal {
    Decimal::from(bps) / dec!(100)
}

impl PricingConfig {
    /// Convert to the calculator's parameters, validating ranges
    pub fn to_params(&self) -> Result<PricingParams> {
        let fee_rate = FeeRate::from_bps(self.swap_fee_bps).context("Invalid swap_fee_bps")?;

        if self.slippage_warn_low_bps > self.slippage_warn_high_bps {
            bail!(
                "slippage_warn_low_bps ({}) exceeds slippage_warn_high_bps ({})",
                self.slippage_warn_low_bps,
                self.slippage_warn_high_bps
            );
        }

        Ok(PricingParams {
            fee_rate,
            high_impact_threshold_pct: bps_to_pct(self.high_impact_threshold_bps),
            slippage_warn_low_pct: bps_to_pct(self.slippage_warn_low_bps),
            slippage_warn_high_pct: bps_to_pct(self.slippage_warn_high_bps),
        })
    }

    pub fn default_slippage(&self) -> Result<SlippageTolerance> {
        SlippageTolerance::from_bps(self.default_slippage_bps)
            .context("Invalid default_slippage_bps")
    }
}

impl SwapdeskConfig {
    /// Load configuration from files with environment overrides
    ///
    /// An explicit `base_path` must exist; the default path is optional.
    /// Environment overlays live in `environments/<env>.toml` next to the
    /// base file.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let (base, required) = match base_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(defaults::paths::BASE_CONFIG), false),
        };

        let mut builder = Config::builder().add_source(File::from(base.as_path()).required(required));

        if let Some(env) = environment {
            let env_file = base
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("environments")
                .join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(defaults::paths::ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        debug!(tokens = config.tokens.len(), "Configuration loaded");
        Ok(config)
    }

    /// Reject values the calculator would refuse later
    pub fn validate(&self) -> Result<()> {
        self.pricing.to_params()?;
        self.pricing.default_slippage()?;

        for token in &self.tokens {
            TokenInfo::new(token.symbol.clone(), token.mint.clone(), token.decimals)
                .with_context(|| format!("Invalid token '{}'", token.symbol))?;
        }
        Ok(())
    }

    /// Look up a token by symbol (case-insensitive)
    pub fn token(&self, symbol: &str) -> Option<&TokenInfo> {
        self.tokens
            .iter()
            .find(|token| token.symbol.eq_ignore_ascii_case(symbol))
    }
}

/// Convenience function to load configuration from a user-supplied path
///
/// Environment variables in the path (`$HOME/...`) are expanded.
pub fn load_config(path: Option<&str>, environment: Option<&str>) -> Result<SwapdeskConfig> {
    match path {
        Some(raw) => {
            let expanded = shellexpand::env(raw).context("Failed to expand config path")?;
            SwapdeskConfig::load(Some(Path::new(expanded.as_ref())), environment)
        }
        None => SwapdeskConfig::load(None, environment),
    }
}
