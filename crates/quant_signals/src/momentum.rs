//! Momentum oscillator (RSI-style) with Wilder's smoothing.
//!
//! ```text
//! diff[i]  = p[i] - p[i-1]
//! gain[i]  = max(diff[i], 0),  loss[i] = max(-diff[i], 0)
//! avg      = mean of the first `period` gains / losses
//! avg      = ((period - 1) · avg + current) / period   for each later diff
//! RS       = avg_gain / avg_loss
//! value    = 100 - 100 / (1 + RS)
//! ```
//!
//! A zero average loss saturates the oscillator at 100 instead of dividing
//! by zero. This includes a perfectly flat series.

use quant_core::types::error::{ensure_len, AnalyticsError, Result};
use tracing::trace;

/// Default lookback period.
pub const DEFAULT_PERIOD: usize = 14;

/// Oscillator level at or above which a market reads as overbought.
pub const OVERBOUGHT_LEVEL: f64 = 70.0;

/// Oscillator level at or below which a market reads as oversold.
pub const OVERSOLD_LEVEL: f64 = 30.0;

/// Classification of an oscillator reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MomentumZone {
    /// Reading at or above [`OVERBOUGHT_LEVEL`].
    Overbought,
    /// Reading between the two thresholds.
    Neutral,
    /// Reading at or below [`OVERSOLD_LEVEL`].
    Oversold,
}

impl MomentumZone {
    /// Classifies an oscillator value.
    pub fn classify(value: f64) -> Self {
        if value >= OVERBOUGHT_LEVEL {
            Self::Overbought
        } else if value <= OVERSOLD_LEVEL {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }

    /// Upper-case label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overbought => "OVERBOUGHT",
            Self::Neutral => "NEUTRAL",
            Self::Oversold => "OVERSOLD",
        }
    }
}

impl std::fmt::Display for MomentumZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// RSI-style momentum oscillator with a fixed lookback period.
///
/// # Examples
///
/// ```rust
/// use quant_signals::momentum::MomentumOscillator;
///
/// let rsi = MomentumOscillator::new(3).unwrap();
/// let rising = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(rsi.compute(&rising).unwrap(), 100.0);
///
/// // Needs more than `period` prices
/// assert!(rsi.compute(&[1.0, 2.0, 3.0]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MomentumOscillator {
    period: usize,
}

impl Default for MomentumOscillator {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
        }
    }
}

impl MomentumOscillator {
    /// Creates an oscillator with the given lookback.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `period` is 0.
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(AnalyticsError::invalid("period", "must be at least 1"));
        }
        Ok(Self { period })
    }

    /// Lookback period.
    #[inline]
    pub fn period(&self) -> usize {
        self.period
    }

    /// Final oscillator value for `series`.
    ///
    /// # Errors
    ///
    /// `InsufficientData` if `series.len() <= period`.
    pub fn compute(&self, series: &[f64]) -> Result<f64> {
        let mut averages = self.seed(series)?;
        for w in series[self.period..].windows(2) {
            averages.update(w[1] - w[0], self.period);
        }
        let value = averages.oscillator();
        trace!(period = self.period, points = series.len(), value, "momentum oscillator");
        Ok(value)
    }

    /// Oscillator value after the seed window and after every later price.
    ///
    /// The result has `series.len() - period` values; the last one equals
    /// [`compute`](Self::compute).
    ///
    /// # Errors
    ///
    /// `InsufficientData` if `series.len() <= period`.
    pub fn series(&self, series: &[f64]) -> Result<Vec<f64>> {
        let mut averages = self.seed(series)?;
        let mut values = Vec::with_capacity(series.len() - self.period);
        values.push(averages.oscillator());
        for w in series[self.period..].windows(2) {
            averages.update(w[1] - w[0], self.period);
            values.push(averages.oscillator());
        }
        Ok(values)
    }

    /// Seeds the averages from the first `period` differences.
    fn seed(&self, series: &[f64]) -> Result<WilderAverages> {
        ensure_len(series.len(), self.period + 1)?;

        let (gain_sum, loss_sum) = series[..=self.period]
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold((0.0, 0.0), |(g, l), diff| (g + diff.max(0.0), l + (-diff).max(0.0)));

        let period = self.period as f64;
        Ok(WilderAverages {
            gain: gain_sum / period,
            loss: loss_sum / period,
        })
    }
}

/// Running average gain and loss.
#[derive(Clone, Copy, Debug)]
struct WilderAverages {
    gain: f64,
    loss: f64,
}

impl WilderAverages {
    #[inline]
    fn update(&mut self, diff: f64, period: usize) {
        let n = period as f64;
        self.gain = ((n - 1.0) * self.gain + diff.max(0.0)) / n;
        self.loss = ((n - 1.0) * self.loss + (-diff).max(0.0)) / n;
    }

    #[inline]
    fn oscillator(&self) -> f64 {
        if self.loss == 0.0 {
            return 100.0;
        }
        let rs = self.gain / self.loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

/// Momentum oscillator value of `series` over `period`.
///
/// # Errors
///
/// `InvalidParameter` if `period` is 0; `InsufficientData` if
/// `series.len() <= period`.
///
/// # Examples
///
/// ```rust
/// use quant_signals::momentum_oscillator;
///
/// let falling: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
/// assert_eq!(momentum_oscillator(&falling, 14).unwrap(), 0.0);
/// ```
pub fn momentum_oscillator(series: &[f64], period: usize) -> Result<f64> {
    MomentumOscillator::new(period)?.compute(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_gains_saturates() {
        let rising: Vec<f64> = (1..=20).map(|v| v as f64).collect();
        assert_eq!(momentum_oscillator(&rising, 14).unwrap(), 100.0);
    }

    #[test]
    fn test_all_losses_is_zero() {
        let falling: Vec<f64> = (1..=20).rev().map(|v| v as f64).collect();
        assert_eq!(momentum_oscillator(&falling, 5).unwrap(), 0.0);
    }

    #[test]
    fn test_flat_series_saturates() {
        assert_eq!(momentum_oscillator(&[10.0; 16], 14).unwrap(), 100.0);
    }

    #[test]
    fn test_seed_only() {
        // period 2, three prices: diffs [+2, -1]
        // avg_gain = 1.0, avg_loss = 0.5, RS = 2, value = 100 - 100/3
        let value = momentum_oscillator(&[10.0, 12.0, 11.0], 2).unwrap();
        assert_relative_eq!(value, 100.0 - 100.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wilder_smoothing_step() {
        // period 2, diffs [+2, -1, +3]
        // seed: gain 1.0, loss 0.5
        // step: gain (1·1.0 + 3)/2 = 2.0, loss (1·0.5 + 0)/2 = 0.25
        // RS = 8, value = 100 - 100/9
        let value = momentum_oscillator(&[10.0, 12.0, 11.0, 14.0], 2).unwrap();
        assert_relative_eq!(value, 100.0 - 100.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_period_one() {
        // Wilder smoothing with period 1 keeps only the latest diff
        assert_eq!(momentum_oscillator(&[5.0, 4.0, 6.0], 1).unwrap(), 100.0);
        assert_eq!(momentum_oscillator(&[5.0, 6.0, 4.0], 1).unwrap(), 0.0);
    }

    #[test]
    fn test_insufficient_data() {
        let err = momentum_oscillator(&[1.0; 14], 14).unwrap_err();
        assert_eq!(err, AnalyticsError::InsufficientData { got: 14, need: 15 });
        assert!(momentum_oscillator(&[], 1).unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_zero_period() {
        assert!(momentum_oscillator(&[1.0, 2.0], 0)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_series_last_matches_compute() {
        let prices = [44.0, 44.3, 44.1, 44.5, 43.9, 44.8, 45.1, 44.7, 45.5, 45.2];
        let rsi = MomentumOscillator::new(4).unwrap();
        let values = rsi.series(&prices).unwrap();
        assert_eq!(values.len(), prices.len() - 4);
        assert_relative_eq!(*values.last().unwrap(), rsi.compute(&prices).unwrap());
        assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_default_period() {
        assert_eq!(MomentumOscillator::default().period(), DEFAULT_PERIOD);
    }

    #[test]
    fn test_zone_classification() {
        assert_eq!(MomentumZone::classify(85.0), MomentumZone::Overbought);
        assert_eq!(MomentumZone::classify(70.0), MomentumZone::Overbought);
        assert_eq!(MomentumZone::classify(50.0), MomentumZone::Neutral);
        assert_eq!(MomentumZone::classify(30.0), MomentumZone::Oversold);
        assert_eq!(MomentumZone::Oversold.to_string(), "OVERSOLD");
    }
}
