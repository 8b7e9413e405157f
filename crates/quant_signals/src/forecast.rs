//! Consensus forecast by simple averaging ("wisdom of crowds").

use quant_core::types::series::{validate_forecasts, ForecastSet};
use quant_core::types::error::Result;
use tracing::trace;

/// Averages independent forecasts position by position.
///
/// # Examples
///
/// ```rust
/// use quant_core::ForecastSet;
/// use quant_signals::forecast::ForecastAggregator;
///
/// let set = ForecastSet::new(vec![vec![1.0, 4.0], vec![3.0, 8.0]]).unwrap();
/// assert_eq!(ForecastAggregator::aggregate(&set), vec![2.0, 6.0]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ForecastAggregator;

impl ForecastAggregator {
    /// Consensus of a validated forecast set.
    pub fn aggregate(forecasts: &ForecastSet) -> Vec<f64> {
        mean_by_position(forecasts.as_slice(), forecasts.horizon())
    }
}

fn mean_by_position<S: AsRef<[f64]>>(forecasts: &[S], horizon: usize) -> Vec<f64> {
    let mut consensus = vec![0.0; horizon];
    for forecast in forecasts {
        for (acc, &value) in consensus.iter_mut().zip(forecast.as_ref()) {
            *acc += value;
        }
    }

    let count = forecasts.len() as f64;
    consensus.iter_mut().for_each(|v| *v /= count);
    trace!(forecasts = forecasts.len(), horizon, "aggregated forecasts");
    consensus
}

/// Arithmetic mean of `forecasts` at every position.
///
/// # Errors
///
/// `InvalidParameter` if `forecasts` is empty or the series lengths differ.
///
/// # Examples
///
/// ```rust
/// use quant_signals::aggregate_forecasts;
///
/// let s = vec![100.0, 101.0, 99.5];
/// assert_eq!(aggregate_forecasts(&[s.clone()]).unwrap(), s);
/// assert!(aggregate_forecasts(&[vec![1.0], vec![1.0, 2.0]]).is_err());
/// ```
pub fn aggregate_forecasts<S: AsRef<[f64]>>(forecasts: &[S]) -> Result<Vec<f64>> {
    let horizon = validate_forecasts(forecasts)?;
    Ok(mean_by_position(forecasts, horizon))
}
