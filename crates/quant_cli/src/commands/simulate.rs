//! Simulate command implementation
//!
//! Runs the GBM path simulator and prints either the full paths or the
//! terminal price of each trial.

use std::io::Write;

use quant_sim::{GbmParams, GbmPathSimulator, SimulationConfig};
use tracing::info;

use crate::config::AnalyticsConfig;
use crate::output::{render, OutputFormat, Payload, Section};
use crate::Result;

/// Simulation inputs taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct SimulateArgs {
    pub initial_price: f64,
    pub steps: usize,
    pub trials: usize,
    pub drift: f64,
    pub volatility: f64,
    pub terminal: bool,
}

/// Run the simulate command
pub fn run<W: Write>(
    out: &mut W,
    args: SimulateArgs,
    config: &AnalyticsConfig,
    format: OutputFormat,
) -> Result<()> {
    info!(
        trials = args.trials,
        steps = args.steps,
        seed = ?config.seed,
        "Starting simulation"
    );

    let sim_config = SimulationConfig::builder()
        .steps(args.steps)
        .trials(args.trials)
        .maybe_seed(config.seed)
        .build()?;
    let params = GbmParams::new(args.initial_price, args.drift, args.volatility);
    let paths = GbmPathSimulator::new(sim_config).simulate(params)?;

    let section = if args.terminal {
        Section::new(
            "Terminal prices",
            "terminal_prices",
            Payload::Series(paths.terminal_prices()),
        )
    } else {
        Section::new("Price paths", "paths", Payload::Matrix(paths.into_inner()))
    };
    render(out, format, &[section])?;

    info!("Simulation complete");
    Ok(())
}
