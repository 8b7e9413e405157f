//! VIX command implementation
//!
//! Estimates the volatility index from interleaved call/put prices.

use std::io::Write;
use std::path::Path;

use quant_signals::volatility_index;
use tracing::info;

use crate::config::AnalyticsConfig;
use crate::input::read_series;
use crate::output::{render, OutputFormat, Payload, Section};
use crate::Result;

/// Run the vix command
pub fn run<W: Write>(
    out: &mut W,
    input: &Path,
    config: &AnalyticsConfig,
    format: OutputFormat,
) -> Result<()> {
    let quotes = read_series(input)?;
    info!(
        quotes = quotes.len(),
        horizon_days = config.horizon_days,
        "Computing volatility index"
    );

    let index = volatility_index(&quotes, config.horizon_days)?;
    render(
        out,
        format,
        &[Section::new(
            "Volatility index",
            "volatility_index",
            Payload::Scalar(index),
        )],
    )
}
