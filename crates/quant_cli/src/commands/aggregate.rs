//! Aggregate command implementation
//!
//! Averages the forecasts stored one per column.

use std::io::Write;
use std::path::Path;

use quant_signals::aggregate_forecasts;
use tracing::info;

use crate::input::read_columns;
use crate::output::{render, OutputFormat, Payload, Section};
use crate::Result;

/// Run the aggregate command
pub fn run<W: Write>(out: &mut W, input: &Path, format: OutputFormat) -> Result<()> {
    let forecasts = read_columns(input)?;
    info!(forecasts = forecasts.len(), "Aggregating forecasts");

    let consensus = aggregate_forecasts(&forecasts)?;
    render(
        out,
        format,
        &[Section::new(
            "Consensus forecast",
            "consensus",
            Payload::Series(consensus),
        )],
    )
}
