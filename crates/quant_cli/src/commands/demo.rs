//! Demo command implementation
//!
//! Synthesises a noisy price history around a fixed level and runs every
//! analytics routine over it.

use std::io::Write;

use quant_signals::{aggregate_forecasts, volatility_index, MomentumOscillator};
use quant_sim::{GbmParams, GbmPathSimulator, NormalSampler, SimulationConfig};
use tracing::info;

use crate::config::AnalyticsConfig;
use crate::output::{render, OutputFormat, Payload, Section};
use crate::Result;

const INITIAL_PRICE: f64 = 100.0;
const DAYS: usize = 30;
const SIMULATIONS: usize = 10;
const DAILY_VOLATILITY: f64 = 0.01;

/// Option prices alternating call, put.
const SAMPLE_QUOTES: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// `DAYS` prices of `INITIAL_PRICE` plus standard normal noise.
fn synthetic_history(sampler: &mut NormalSampler) -> Vec<f64> {
    (0..DAYS)
        .map(|_| INITIAL_PRICE + sampler.gen_standard_normal())
        .collect()
}

/// Run the demo command
pub fn run<W: Write>(out: &mut W, config: &AnalyticsConfig, format: OutputFormat) -> Result<()> {
    info!(seed = ?config.seed, "Running analytics demo");

    let mut sampler = match config.seed {
        Some(seed) => NormalSampler::from_seed(seed),
        None => NormalSampler::from_entropy(),
    };
    let history = synthetic_history(&mut sampler);

    let sim_config = SimulationConfig::builder()
        .steps(DAYS)
        .trials(SIMULATIONS)
        .maybe_seed(config.seed)
        .build()?;
    let paths = GbmPathSimulator::new(sim_config)
        .simulate(GbmParams::new(INITIAL_PRICE, 0.0, DAILY_VOLATILITY))?;

    let momentum = MomentumOscillator::new(config.rsi_period)?.compute(&history)?;
    let stops = config.trend_stop()?.compute(&history)?;
    let consensus = aggregate_forecasts(&[history.as_slice()])?;
    let index = volatility_index(&SAMPLE_QUOTES, config.horizon_days)?;

    let mut sections = vec![
        Section::new("Price history", "history", Payload::Series(history)),
        Section::new(
            "Simulated terminal prices",
            "terminal_prices",
            Payload::Series(paths.terminal_prices()),
        ),
    ];
    sections.extend(super::rsi::sections(momentum));
    sections.extend([
        Section::new("Trend stop", "trend_stop", Payload::Series(stops)),
        Section::new("Consensus forecast", "consensus", Payload::Series(consensus)),
        Section::new("Volatility index", "volatility_index", Payload::Scalar(index)),
    ]);

    render(out, format, &sections)?;
    info!("Demo complete");
    Ok(())
}
