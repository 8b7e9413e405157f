//! RSI command implementation
//!
//! Computes the momentum oscillator of a price series and classifies it.

use std::io::Write;
use std::path::Path;

use quant_signals::{MomentumOscillator, MomentumZone};
use tracing::info;

use crate::config::AnalyticsConfig;
use crate::input::read_prices;
use crate::output::{render, OutputFormat, Payload, Section};
use crate::Result;

/// Run the rsi command
pub fn run<W: Write>(
    out: &mut W,
    input: &Path,
    config: &AnalyticsConfig,
    format: OutputFormat,
) -> Result<()> {
    let prices = read_prices(input)?;
    info!(points = prices.len(), period = config.rsi_period, "Computing momentum oscillator");

    let value = MomentumOscillator::new(config.rsi_period)?.compute(&prices)?;
    render(out, format, &sections(value))
}

pub(crate) fn sections(value: f64) -> [Section; 2] {
    [
        Section::new("Momentum oscillator", "momentum", Payload::Scalar(value)),
        Section::new(
            "Zone",
            "zone",
            Payload::Label(MomentumZone::classify(value).to_string()),
        ),
    ]
}
