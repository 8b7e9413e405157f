//! Volatility index from interleaved call/put option prices.

use quant_core::types::options::OptionQuoteSeries;
use quant_core::types::error::Result;
use tracing::debug;

use crate::volatility::VolatilityEstimator;

/// Combines call-side and put-side realised volatility into one index.
///
/// ```text
/// index = 100 × (vol(calls) + vol(puts)) / 2
/// ```
///
/// # Examples
///
/// ```rust
/// use quant_core::OptionQuoteSeries;
/// use quant_signals::vix::VolatilityIndexCalculator;
///
/// let quotes = OptionQuoteSeries::new(vec![5.0, 4.0, 5.5, 3.8, 5.2, 4.1]).unwrap();
/// let index = VolatilityIndexCalculator::compute(&quotes, 30.0).unwrap();
/// assert!(index > 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct VolatilityIndexCalculator;

impl VolatilityIndexCalculator {
    /// Index value for a validated quote series.
    ///
    /// # Errors
    ///
    /// Propagates [`VolatilityEstimator::estimate`] failures for either side,
    /// e.g. `InsufficientData` when only one pair is quoted.
    pub fn compute(quotes: &OptionQuoteSeries, horizon_days: f64) -> Result<f64> {
        let call_vol = VolatilityEstimator::estimate(&quotes.calls(), horizon_days)?;
        let put_vol = VolatilityEstimator::estimate(&quotes.puts(), horizon_days)?;
        let index = 100.0 * (call_vol + put_vol) / 2.0;

        debug!(
            pairs = quotes.pair_count(),
            horizon_days, call_vol, put_vol, index, "volatility index"
        );
        Ok(index)
    }
}

/// Volatility index of interleaved `option_prices` (call, put, call, put, …).
///
/// # Errors
///
/// `InvalidParameter` if `option_prices` is empty or of odd length, or if a
/// price or `horizon_days` is not positive; `InsufficientData` if fewer than
/// two pairs are quoted.
pub fn volatility_index(option_prices: &[f64], horizon_days: f64) -> Result<f64> {
    let quotes = OptionQuoteSeries::new(option_prices.to_vec())?;
    VolatilityIndexCalculator::compute(&quotes, horizon_days)
}
