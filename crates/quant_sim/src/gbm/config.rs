//! Simulation run configuration.
//!
//! This module provides the configuration type and builder for GBM
//! path simulation runs.

use quant_core::types::error::{AnalyticsError, Result};

/// Default minimum trials per worker thread before parallelisation kicks in.
pub const DEFAULT_MIN_TRIALS_PER_THREAD: usize = 64;

/// Simulation run configuration.
///
/// Immutable configuration specifying the run shape. Use
/// [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use quant_sim::gbm::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .steps(30)
///     .trials(10)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.steps(), 30);
/// assert_eq!(config.trials(), 10);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of prices per trial, including the initial price.
    steps: usize,
    /// Number of independent trials.
    trials: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Whether trials may run on the rayon pool.
    parallel: bool,
    /// Minimum trials per thread before the parallel path is taken.
    min_trials_per_thread: usize,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of prices per trial.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether parallel execution is enabled.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the minimum trials per thread for parallel execution.
    #[inline]
    pub fn min_trials_per_thread(&self) -> usize {
        self.min_trials_per_thread
    }

    /// Determines if the run should use the rayon pool.
    #[inline]
    pub fn should_parallelise(&self) -> bool {
        let n_threads = rayon::current_num_threads();
        self.parallel && n_threads > 1 && self.trials >= self.min_trials_per_thread * n_threads
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `steps` or `trials` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(AnalyticsError::invalid("steps", "must be at least 1, got 0"));
        }
        if self.trials == 0 {
            return Err(AnalyticsError::invalid("trials", "must be at least 1, got 0"));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// ```rust
/// use quant_sim::gbm::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .steps(252)
///     .trials(50_000)
///     .parallel(false)
///     .build()
///     .unwrap();
/// assert!(!config.should_parallelise());
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    steps: Option<usize>,
    trials: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
    min_trials_per_thread: usize,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            steps: None,
            trials: None,
            seed: None,
            parallel: true,
            min_trials_per_thread: DEFAULT_MIN_TRIALS_PER_THREAD,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of prices per trial (including the initial price).
    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the number of trials.
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed; `None` draws one from process entropy at run time.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel execution.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the minimum trials per thread before parallelisation kicks in.
    #[inline]
    pub fn min_trials_per_thread(mut self, min_trials_per_thread: usize) -> Self {
        self.min_trials_per_thread = min_trials_per_thread.max(1);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `steps` or `trials` is unset or invalid.
    pub fn build(self) -> Result<SimulationConfig> {
        let steps = self
            .steps
            .ok_or_else(|| AnalyticsError::invalid("steps", "must be specified"))?;
        let trials = self
            .trials
            .ok_or_else(|| AnalyticsError::invalid("trials", "must be specified"))?;

        let config = SimulationConfig {
            steps,
            trials,
            seed: self.seed,
            parallel: self.parallel,
            min_trials_per_thread: self.min_trials_per_thread,
        };

        config.validate()?;
        Ok(config)
    }
}
