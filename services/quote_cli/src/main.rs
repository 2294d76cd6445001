//! Swapdesk Quote Tool
//!
//! Command-line front end for the constant product pricing engine. Quotes a
//! swap against given pool reserves, derives the slippage guard for the swap
//! instruction, and reports pool statistics.
//!
//! Reserves may be given in human units, or as raw on-chain balances with
//! `--raw` plus the token symbols so they can be scaled by the configured
//! decimals.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use rust_decimal::Decimal;
use swapdesk_amm::slippage::PRESETS;
use swapdesk_amm::{
    format_price, minimum_out, parse_amount, FeeRate, FeeTier, PoolSnapshot, PoolStats,
    PriceRange, QuoteSummary, SlippageTolerance, SwapDirection, SwapQuoter,
};
use swapdesk_config::{load_config, SwapdeskConfig};
use swapdesk_types::TokenInfo;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "swapdesk_quote")]
#[command(about = "Constant product swap quotes and pool statistics")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Environment overlay (devnet, mainnet, ...)
    #[arg(short, long, global = true)]
    environment: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Quote a swap against pool reserves
    Quote(QuoteArgs),
    /// Minimum acceptable output for a quoted amount
    MinOut {
        #[arg(long)]
        amount_out: String,
        /// Slippage tolerance in percent
        #[arg(long)]
        slippage: String,
    },
    /// Value locked, fee revenue and yield of a pool
    Stats(StatsArgs),
    /// List fee tiers and slippage presets
    Tiers,
    /// Default price range for a new pool
    Range {
        /// Starting price of token B in token A
        #[arg(long)]
        starting_price: String,
        #[arg(long)]
        full_range: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    AToB,
    BToA,
}

impl From<DirectionArg> for SwapDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::AToB => SwapDirection::AtoB,
            DirectionArg::BToA => SwapDirection::BtoA,
        }
    }
}

#[derive(Args, Debug)]
struct QuoteArgs {
    /// Token A reserve
    #[arg(long)]
    reserve_a: String,

    /// Token B reserve
    #[arg(long)]
    reserve_b: String,

    /// Amount to sell, in human units
    #[arg(long)]
    amount_in: String,

    #[arg(long, value_enum, default_value_t = DirectionArg::AToB)]
    direction: DirectionArg,

    /// Slippage tolerance in percent (defaults to configuration)
    #[arg(long)]
    slippage: Option<String>,

    /// Override the configured swap fee
    #[arg(long)]
    fee_bps: Option<u32>,

    /// Reserves are raw on-chain balances; requires both token symbols
    #[arg(long, requires_all = ["token_a", "token_b"])]
    raw: bool,

    /// Token A symbol from the configured token list
    #[arg(long)]
    token_a: Option<String>,

    /// Token B symbol from the configured token list
    #[arg(long)]
    token_b: Option<String>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[arg(long)]
    reserve_a: String,
    #[arg(long)]
    reserve_b: String,
    /// Quote-currency price of one token A
    #[arg(long)]
    price_a: String,
    /// Quote-currency price of one token B
    #[arg(long)]
    price_b: String,
    /// Trailing 24h volume in the quote currency
    #[arg(long)]
    volume: String,
    #[arg(long)]
    fee_bps: Option<u32>,
}

/// Quote plus the raw guard amount for the swap instruction
#[derive(Debug, Serialize)]
struct QuoteReport {
    #[serde(flatten)]
    summary: QuoteSummary,
    fee: FeeRate,
    token_in: String,
    token_out: String,
    /// `minimum_out` in the output token's smallest units, when its decimals are known
    minimum_out_raw: Option<u64>,
}

fn resolve_token(config: &SwapdeskConfig, symbol: Option<&str>) -> Result<Option<TokenInfo>> {
    symbol
        .map(|symbol| {
            config
                .token(symbol)
                .cloned()
                .with_context(|| format!("Token '{}' not in configured token list", symbol))
        })
        .transpose()
}

fn parse_reserve(input: &str, raw: bool, token: Option<&TokenInfo>) -> Result<Decimal> {
    match (raw, token) {
        (true, Some(token)) => {
            let units: u64 = input
                .trim()
                .parse()
                .with_context(|| format!("Raw reserve '{}' is not an integer", input))?;
            token
                .to_human(units)
                .with_context(|| format!("Cannot scale {} reserve", token.symbol))
        }
        _ => parse_amount(input).context("Invalid reserve"),
    }
}

fn fee_rate(config: &SwapdeskConfig, override_bps: Option<u32>) -> Result<FeeRate> {
    let bps = override_bps.unwrap_or(config.pricing.swap_fee_bps);
    FeeRate::from_bps(bps).context("Invalid fee")
}

fn run_quote(config: &SwapdeskConfig, args: &QuoteArgs) -> Result<QuoteReport> {
    let token_a = resolve_token(config, args.token_a.as_deref())?;
    let token_b = resolve_token(config, args.token_b.as_deref())?;

    let reserve_a = parse_reserve(&args.reserve_a, args.raw, token_a.as_ref())?;
    let reserve_b = parse_reserve(&args.reserve_b, args.raw, token_b.as_ref())?;
    let amount_in = parse_amount(&args.amount_in).context("Invalid amount_in")?;

    let slippage = match &args.slippage {
        Some(input) => {
            SlippageTolerance::new(parse_amount(input).context("Invalid slippage")?)?
        }
        None => config.pricing.default_slippage()?,
    };

    let fee = fee_rate(config, args.fee_bps)?;
    let pool = PoolSnapshot::new(reserve_a, reserve_b, fee);
    let quoter = SwapQuoter::new(config.pricing.to_params()?);
    let direction = SwapDirection::from(args.direction);

    debug!(%reserve_a, %reserve_b, ?direction, "Quoting swap");
    let summary = quoter
        .quote(&pool, direction, amount_in, slippage)
        .context("Quote failed")?;

    let (token_in, token_out) = match direction {
        SwapDirection::AtoB => (token_a, token_b),
        SwapDirection::BtoA => (token_b, token_a),
    };
    let minimum_out_raw = token_out
        .as_ref()
        .map(|token| token.to_raw(summary.minimum_out))
        .transpose()
        .context("Cannot scale minimum output")?;

    let default_symbol = |token: &Option<TokenInfo>, fallback: &str| {
        token
            .as_ref()
            .map(|t| t.symbol.clone())
            .unwrap_or_else(|| fallback.to_string())
    };
    let (fallback_in, fallback_out) = match direction {
        SwapDirection::AtoB => ("A", "B"),
        SwapDirection::BtoA => ("B", "A"),
    };

    Ok(QuoteReport {
        fee,
        token_in: default_symbol(&token_in, fallback_in),
        token_out: default_symbol(&token_out, fallback_out),
        minimum_out_raw,
        summary,
    })
}

fn print_quote(report: &QuoteReport) {
    let quote = &report.summary.quote;
    println!(
        "Rate            1 {} = {} {}",
        report.token_in,
        format_price(quote.expected_price),
        report.token_out
    );
    println!("Amount in       {} {}", quote.amount_in.normalize(), report.token_in);
    println!(
        "Amount out      {} {}",
        quote.amount_out.round_dp(9).normalize(),
        report.token_out
    );
    println!(
        "Minimum out     {} {} ({} slippage)",
        report.summary.minimum_out.round_dp(9).normalize(),
        report.token_out,
        report.summary.slippage
    );
    if let Some(raw) = report.minimum_out_raw {
        println!("Minimum out raw {}", raw);
    }
    println!("Price impact    {}%", quote.price_impact_pct.round_dp(2));
    println!("Swap fee        {}", report.fee);

    if report.summary.high_impact {
        println!("High price impact! Swap results in significant slippage.");
    }
    if let Some(warning) = report.summary.slippage_warning {
        println!("{}", warning);
    }
}

fn run_stats(config: &SwapdeskConfig, args: &StatsArgs) -> Result<PoolStats> {
    let reserves = (
        parse_amount(&args.reserve_a).context("Invalid reserve_a")?,
        parse_amount(&args.reserve_b).context("Invalid reserve_b")?,
    );
    let prices = (
        parse_amount(&args.price_a).context("Invalid price_a")?,
        parse_amount(&args.price_b).context("Invalid price_b")?,
    );
    let volume = parse_amount(&args.volume).context("Invalid volume")?;
    let fee = fee_rate(config, args.fee_bps)?;

    PoolStats::compute(reserves, prices, volume, fee).context("Cannot compute pool statistics")
}

fn run_range(starting_price: &str, full_range: bool) -> Result<PriceRange> {
    let price = parse_amount(starting_price).context("Invalid starting_price")?;
    PriceRange::for_new_pool(price, full_range).context("Cannot derive price range")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("swapdesk_quote=info".parse()?),
        )
        .init();

    let config = load_config(cli.config.as_deref(), cli.environment.as_deref())?;
    info!(
        "Pricing: fee {} bps, impact threshold {} bps",
        config.pricing.swap_fee_bps, config.pricing.high_impact_threshold_bps
    );

    match &cli.command {
        Commands::Quote(args) => {
            let report = run_quote(&config, args)?;
            if cli.json {
                print_json(&report)?;
            } else {
                print_quote(&report);
            }
        }
        Commands::MinOut {
            amount_out,
            slippage,
        } => {
            let amount_out = parse_amount(amount_out).context("Invalid amount_out")?;
            let slippage = parse_amount(slippage).context("Invalid slippage")?;
            let guard = minimum_out(amount_out, slippage)?;
            if cli.json {
                print_json(&serde_json::json!({ "minimum_out": guard }))?;
            } else {
                println!("{}", guard.normalize());
            }
        }
        Commands::Stats(args) => {
            let stats = run_stats(&config, args)?;
            if cli.json {
                print_json(&stats)?;
            } else {
                println!("TVL             {}", stats.tvl.round_dp(2));
                println!("Volume (24h)    {}", stats.volume_24h.round_dp(2));
                println!("Fees (24h)      {}", stats.fees_24h.round_dp(2));
                println!("APR             {}%", stats.apr_pct.round_dp(2));
            }
        }
        Commands::Tiers => {
            let configured = fee_rate(&config, None)?;
            if cli.json {
                print_json(&serde_json::json!({
                    "swap_fee": configured,
                    "fee_tiers": FeeTier::ALL,
                    "slippage_presets": PRESETS,
                }))?;
            } else {
                println!("Swap fee: {}", configured);
                for tier in FeeTier::ALL {
                    println!("  {:>6}  {}", tier.label, tier.description);
                }
                let presets: Vec<String> = PRESETS.iter().map(|p| format!("{}%", p)).collect();
                println!("Slippage presets: {}", presets.join(", "));
            }
        }
        Commands::Range {
            starting_price,
            full_range,
        } => {
            let range = run_range(starting_price, *full_range)?;
            if cli.json {
                print_json(&range)?;
            } else {
                match range {
                    PriceRange::Full => println!("Full range"),
                    PriceRange::Bounded { min, max } => {
                        println!("Min price       {}", min.normalize());
                        println!("Max price       {}", max.normalize());
                    }
                }
            }
        }
    }

    Ok(())
}
