//! Quant CLI - Command Line Driver for Market Analytics
//!
//! This is the operational entry point for the quant analytics toolkit.
//!
//! # Commands
//!
//! - `quant simulate` - Simulate GBM price paths
//! - `quant rsi --input <file>` - Momentum oscillator of a price series
//! - `quant sar --input <file>` - Trailing trend stop of a price series
//! - `quant aggregate --input <file>` - Consensus of forecasts stored per column
//! - `quant vix --input <file>` - Volatility index from call/put prices
//! - `quant demo` - Run every routine over a synthetic price history
//!
//! # Configuration
//!
//! Settings come from `quant.toml` (or `--config`), `QUANT_*` environment
//! variables, and command-line flags, in increasing order of precedence.
//! `RUST_LOG` overrides the configured log level.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

pub use error::{CliError, Result};

use commands::simulate::SimulateArgs;
use config::{build_config, CliOverrides, LogLevel};
use output::OutputFormat;

/// Quantitative market analytics CLI
#[derive(Parser)]
#[command(name = "quant")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./quant.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate GBM price paths
    Simulate {
        /// Starting price of every trial
        #[arg(long, default_value_t = 100.0)]
        initial_price: f64,

        /// Prices per path, including the starting price
        #[arg(long, default_value_t = 30)]
        steps: usize,

        /// Number of independent paths
        #[arg(long, default_value_t = 10)]
        trials: usize,

        /// Per-step drift of the log return
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        drift: f64,

        /// Per-step volatility of the log return
        #[arg(long, default_value_t = 0.01)]
        volatility: f64,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Print only the terminal price of each path
        #[arg(long)]
        terminal: bool,
    },

    /// Momentum oscillator (RSI-style) of a price series
    Rsi {
        /// Path to a headerless CSV of prices
        #[arg(short, long)]
        input: PathBuf,

        /// Lookback period
        #[arg(short, long)]
        period: Option<usize>,
    },

    /// Trailing trend stop (Parabolic-SAR-style) of a price series
    Sar {
        /// Path to a headerless CSV of prices
        #[arg(short, long)]
        input: PathBuf,

        /// Acceleration increment
        #[arg(long)]
        accel_step: Option<f64>,

        /// Acceleration cap
        #[arg(long)]
        accel_max: Option<f64>,
    },

    /// Consensus of forecasts stored one per column
    Aggregate {
        /// Path to a headerless CSV with one forecast per column
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Volatility index from interleaved call/put prices
    Vix {
        /// Path to a headerless CSV of prices alternating call, put
        #[arg(short, long)]
        input: PathBuf,

        /// Horizon in days
        #[arg(long)]
        horizon_days: Option<f64>,
    },

    /// Run every routine over a synthetic price history
    Demo {
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Collects the flags that override configuration values.
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            config_file: self.config.clone(),
            log_level: self.verbose.then_some(LogLevel::Debug),
            ..Default::default()
        };

        match &self.command {
            Commands::Simulate { seed, .. } | Commands::Demo { seed } => overrides.seed = *seed,
            Commands::Rsi { period, .. } => overrides.rsi_period = *period,
            Commands::Sar {
                accel_step,
                accel_max,
                ..
            } => {
                overrides.sar_accel_step = *accel_step;
                overrides.sar_accel_max = *accel_max;
            }
            Commands::Vix { horizon_days, .. } => overrides.horizon_days = *horizon_days,
            Commands::Aggregate { .. } => {}
        }
        overrides
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides()).context("failed to load configuration")?;

    // Initialise tracing; logs go to stderr so stdout carries only results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let format = cli.format;

    match cli.command {
        Commands::Simulate {
            initial_price,
            steps,
            trials,
            drift,
            volatility,
            terminal,
            ..
        } => {
            let args = SimulateArgs {
                initial_price,
                steps,
                trials,
                drift,
                volatility,
                terminal,
            };
            commands::simulate::run(&mut out, args, &config, format)
        }
        Commands::Rsi { input, .. } => commands::rsi::run(&mut out, &input, &config, format),
        Commands::Sar { input, .. } => commands::sar::run(&mut out, &input, &config, format),
        Commands::Aggregate { input } => commands::aggregate::run(&mut out, &input, format),
        Commands::Vix { input, .. } => commands::vix::run(&mut out, &input, &config, format),
        Commands::Demo { .. } => commands::demo::run(&mut out, &config, format),
    }?;

    Ok(())
}
