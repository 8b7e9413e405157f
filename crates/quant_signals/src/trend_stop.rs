//! Trend-following trailing stop (Parabolic-SAR-style, uptrend only).
//!
//! The stop trails an ever-rising extreme point. Each step the acceleration
//! factor grows by `accel_step` (capped at `accel_max`) when price makes a new
//! high, and drops back to `accel_step` otherwise. The stop then moves the
//! fraction `accel_factor` of the way toward the extreme point. A new high
//! raises the extreme point after the stop has moved and resets the factor.
//!
//! There is no reversal into a downtrend: the stop never flips above price.

use quant_core::types::error::{ensure_positive, AnalyticsError, Result};
use tracing::trace;

/// Default acceleration increment.
pub const DEFAULT_ACCEL_STEP: f64 = 0.02;

/// Default acceleration cap.
pub const DEFAULT_ACCEL_MAX: f64 = 0.2;

/// Validated acceleration parameters.
///
/// # Examples
///
/// ```rust
/// use quant_signals::trend_stop::TrendStop;
///
/// let stop = TrendStop::default();
/// let path = stop.compute(&[100.0, 105.0, 103.0, 108.0]).unwrap();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path[0], 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendStop {
    accel_step: f64,
    accel_max: f64,
}

impl Default for TrendStop {
    fn default() -> Self {
        Self {
            accel_step: DEFAULT_ACCEL_STEP,
            accel_max: DEFAULT_ACCEL_MAX,
        }
    }
}

impl TrendStop {
    /// Creates a trend stop.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `0 < accel_step < accel_max` and both are finite.
    pub fn new(accel_step: f64, accel_max: f64) -> Result<Self> {
        ensure_positive("accel_step", accel_step)?;
        if !(accel_max.is_finite() && accel_max > accel_step) {
            return Err(AnalyticsError::invalid(
                "accel_max",
                format!(
                    "must be finite and greater than accel_step {}, got {}",
                    accel_step, accel_max
                ),
            ));
        }
        Ok(Self {
            accel_step,
            accel_max,
        })
    }

    /// Acceleration increment.
    #[inline]
    pub fn accel_step(&self) -> f64 {
        self.accel_step
    }

    /// Acceleration cap.
    #[inline]
    pub fn accel_max(&self) -> f64 {
        self.accel_max
    }

    /// Trailing stop price at every step of `series`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `series` is empty.
    pub fn compute(&self, series: &[f64]) -> Result<Vec<f64>> {
        let (&first, rest) = series
            .split_first()
            .ok_or_else(|| AnalyticsError::invalid("series", "must not be empty"))?;

        let mut state = TrendStopState::new(first, self.accel_step);
        let mut stops = Vec::with_capacity(series.len());
        stops.push(state.sar);
        for &price in rest {
            stops.push(state.step(price, self));
        }

        trace!(
            points = series.len(),
            last = state.sar,
            extreme_point = state.extreme_point,
            "trend stop"
        );
        Ok(stops)
    }
}

/// Per-step automaton state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendStopState {
    /// Current stop price.
    pub sar: f64,
    /// Highest price seen so far.
    pub extreme_point: f64,
    /// Current acceleration factor.
    pub accel_factor: f64,
}

impl TrendStopState {
    /// Initial state at the first price.
    #[inline]
    pub fn new(first_price: f64, accel_step: f64) -> Self {
        Self {
            sar: first_price,
            extreme_point: first_price,
            accel_factor: accel_step,
        }
    }

    /// Advances one price and returns the new stop.
    pub fn step(&mut self, price: f64, params: &TrendStop) -> f64 {
        let new_high = price > self.extreme_point;

        self.accel_factor = if new_high {
            (self.accel_factor + params.accel_step).min(params.accel_max)
        } else {
            params.accel_step
        };

        self.sar += self.accel_factor * (self.extreme_point - self.sar);

        if new_high {
            self.extreme_point = price;
            self.accel_factor = params.accel_step.min(params.accel_max);
        }

        self.sar
    }
}

/// Trailing stop series for `series`.
///
/// # Errors
///
/// `InvalidParameter` if `series` is empty or the acceleration parameters
/// violate `0 < accel_step < accel_max`.
///
/// # Examples
///
/// ```rust
/// use quant_signals::{trend_stop, DEFAULT_ACCEL_MAX, DEFAULT_ACCEL_STEP};
///
/// let stops = trend_stop(&[10.0, 11.0], DEFAULT_ACCEL_STEP, DEFAULT_ACCEL_MAX).unwrap();
/// assert_eq!(stops, vec![10.0, 10.0]);
/// ```
pub fn trend_stop(series: &[f64], accel_step: f64, accel_max: f64) -> Result<Vec<f64>> {
    TrendStop::new(accel_step, accel_max)?.compute(series)
}
