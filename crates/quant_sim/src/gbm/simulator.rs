//! GBM path simulator.
//!
//! Each trial evolves independently from the initial price using the
//! log-space update
//! ```text
//! S[j] = S[j-1] × exp(z),   z ~ N(μ - ½σ², σ)
//! ```
//!
//! # Independence and Reproducibility
//!
//! Trial `t` of a run seeded with `seed` draws its shocks from
//! `NormalSampler::stream(seed, t)`. Trials never share generator state, so
//! sequential and rayon-parallel runs produce identical path sets.

use quant_core::types::error::{AnalyticsError, Result};
use rayon::prelude::*;
use tracing::debug;

use super::config::SimulationConfig;
use super::params::GbmParams;
use super::paths::PricePathSet;
use crate::rng::NormalSampler;

/// Monte Carlo price-path simulator.
///
/// # Examples
///
/// ```rust
/// use quant_sim::gbm::{GbmParams, GbmPathSimulator, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .steps(30)
///     .trials(1_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let simulator = GbmPathSimulator::new(config);
/// let paths = simulator.simulate(GbmParams::new(100.0, 0.0, 0.01)).unwrap();
///
/// assert_eq!(paths.trials(), 1_000);
/// assert!(paths.iter().all(|p| p[0] == 100.0));
/// ```
#[derive(Clone, Debug)]
pub struct GbmPathSimulator {
    config: SimulationConfig,
}

impl GbmPathSimulator {
    /// Creates a simulator for the given run configuration.
    #[inline]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the run configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `trials` independent paths of `steps` prices each.
    ///
    /// Without a configured seed, one is drawn from process entropy and
    /// logged at debug level so the run can be replayed.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `params` fails validation.
    pub fn simulate(&self, params: GbmParams) -> Result<PricePathSet> {
        params.validate()?;

        let seed = self.config.seed().unwrap_or_else(rand::random);
        let steps = self.config.steps();
        let trials = self.config.trials();
        let parallel = self.config.should_parallelise();

        debug!(
            trials,
            steps,
            seed,
            parallel,
            initial_price = params.initial_price,
            drift = params.drift,
            volatility = params.volatility,
            "simulating GBM paths"
        );

        let run_trial = |trial: usize| {
            let mut sampler = NormalSampler::stream(seed, trial as u64);
            simulate_trial(&params, steps, &mut sampler)
        };

        let paths = if parallel {
            (0..trials)
                .into_par_iter()
                .map(run_trial)
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..trials).map(run_trial).collect::<Result<Vec<_>>>()?
        };

        Ok(PricePathSet::new(paths, steps))
    }

    /// Simulates every trial sequentially on a caller-owned sampler.
    ///
    /// Trials consume consecutive segments of the sampler's stream, so they
    /// remain independent draws. The configured seed and parallel flag are
    /// ignored.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `params` fails validation.
    pub fn simulate_with(
        &self,
        sampler: &mut NormalSampler,
        params: GbmParams,
    ) -> Result<PricePathSet> {
        params.validate()?;

        let steps = self.config.steps();
        debug!(
            trials = self.config.trials(),
            steps,
            seed = ?sampler.seed(),
            "simulating GBM paths on caller sampler"
        );

        let paths = (0..self.config.trials())
            .map(|_| simulate_trial(&params, steps, sampler))
            .collect::<Result<Vec<_>>>()?;

        Ok(PricePathSet::new(paths, steps))
    }
}

/// Evolves one path of `steps` prices.
fn simulate_trial(
    params: &GbmParams,
    steps: usize,
    sampler: &mut NormalSampler,
) -> Result<Vec<f64>> {
    let mean = params.shock_mean();
    let stddev = params.shock_stddev();

    let mut path = Vec::with_capacity(steps);
    let mut price = params.initial_price;
    path.push(price);

    for step in 1..steps {
        // σ = 0 leaves only the drift; the sampler rejects a zero stddev
        let shock = if params.is_deterministic() {
            mean
        } else {
            sampler.sample(mean, stddev)?
        };
        price *= shock.exp();
        if !(price.is_finite() && price > 0.0) {
            return Err(unrepresentable_price(params, step, price));
        }
        path.push(price);
    }

    Ok(path)
}

/// Error for a price that underflowed to zero or overflowed to infinity.
fn unrepresentable_price(params: &GbmParams, step: usize, price: f64) -> AnalyticsError {
    let name = if params.is_deterministic() {
        "drift"
    } else {
        "volatility"
    };
    AnalyticsError::invalid(
        name,
        format!(
            "drift {} and volatility {} produce a non-representable price {} at step {}",
            params.drift, params.volatility, price, step
        ),
    )
}

/// Simulates GBM price paths.
///
/// Convenience wrapper over [`GbmPathSimulator`]: returns `trials` series of
/// `steps` prices each, all starting at `initial_price`. Pass a `seed` for a
/// reproducible run.
///
/// # Errors
///
/// `InvalidParameter` if `initial_price ≤ 0`, `steps < 1`, `trials < 1`,
/// `volatility < 0`, or any input is not finite. Also `InvalidParameter`
/// when drift or volatility drive a price to zero or infinity in `f64`.
///
/// # Examples
///
/// ```rust
/// use quant_sim::simulate;
///
/// let paths = simulate(100.0, 10, 4, 0.0, 0.0, None).unwrap();
/// assert_eq!(paths.len(), 4);
/// assert!(paths.iter().all(|p| p.iter().all(|&x| x == 100.0)));
/// ```
pub fn simulate(
    initial_price: f64,
    steps: usize,
    trials: usize,
    drift: f64,
    volatility: f64,
    seed: Option<u64>,
) -> Result<Vec<Vec<f64>>> {
    let params = GbmParams::new(initial_price, drift, volatility);
    params.validate()?;

    let config = SimulationConfig::builder()
        .steps(steps)
        .trials(trials)
        .maybe_seed(seed)
        .build()?;

    GbmPathSimulator::new(config)
        .simulate(params)
        .map(PricePathSet::into_inner)
}
