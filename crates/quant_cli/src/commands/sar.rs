//! SAR command implementation
//!
//! Computes the trailing trend stop of a price series.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::AnalyticsConfig;
use crate::input::read_prices;
use crate::output::{render, OutputFormat, Payload, Section};
use crate::Result;

/// Run the sar command
pub fn run<W: Write>(
    out: &mut W,
    input: &Path,
    config: &AnalyticsConfig,
    format: OutputFormat,
) -> Result<()> {
    let prices = read_prices(input)?;
    let stop = config.trend_stop()?;
    info!(
        points = prices.len(),
        accel_step = stop.accel_step(),
        accel_max = stop.accel_max(),
        "Computing trend stop"
    );

    let stops = stop.compute(&prices)?;
    render(
        out,
        format,
        &[Section::new("Trend stop", "trend_stop", Payload::Series(stops))],
    )
}
