//! Realised volatility of log returns, scaled to a horizon.

use quant_core::types::error::{ensure_len, ensure_positive, AnalyticsError, Result};
use tracing::trace;

/// Standard deviation of log returns scaled by `sqrt(horizon_days)`.
///
/// The standard deviation uses the population (n) denominator, so a series
/// of two prices has a single return and zero dispersion.
///
/// # Examples
///
/// ```rust
/// use quant_signals::volatility::VolatilityEstimator;
///
/// let vol = VolatilityEstimator::estimate(&[100.0, 101.0, 100.5, 102.0], 30.0).unwrap();
/// assert!(vol > 0.0);
///
/// // Constant prices have no volatility
/// assert_eq!(VolatilityEstimator::estimate(&[5.0, 5.0, 5.0], 30.0).unwrap(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct VolatilityEstimator;

impl VolatilityEstimator {
    /// Horizon-scaled realised volatility of `prices`.
    ///
    /// # Errors
    ///
    /// `InsufficientData` if fewer than two prices are given;
    /// `InvalidParameter` if a price or `horizon_days` is not finite and positive.
    pub fn estimate(prices: &[f64], horizon_days: f64) -> Result<f64> {
        ensure_positive("horizon_days", horizon_days)?;
        ensure_len(prices.len(), 2)?;
        if let Some((index, price)) = prices
            .iter()
            .enumerate()
            .find(|&(_, &p)| !(p.is_finite() && p > 0.0))
        {
            return Err(AnalyticsError::invalid(
                "prices",
                format!("price at index {} must be finite and positive, got {}", index, price),
            ));
        }

        let returns = log_returns(prices);
        let volatility = population_std_dev(&returns) * horizon_days.sqrt();
        trace!(points = prices.len(), horizon_days, volatility, "realised volatility");
        Ok(volatility)
    }
}

/// Log returns `ln(p[i] / p[i-1])`.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// Population standard deviation of a non-empty slice.
fn population_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Horizon-scaled realised volatility of `prices`.
///
/// See [`VolatilityEstimator::estimate`].
pub fn realized_volatility(prices: &[f64], horizon_days: f64) -> Result<f64> {
    VolatilityEstimator::estimate(prices, horizon_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_value() {
        // returns ln 2 and ln 0.5: mean 0, population variance (ln 2)²
        let vol = VolatilityEstimator::estimate(&[1.0, 2.0, 1.0], 1.0).unwrap();
        assert_relative_eq!(vol, 2.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_odd_call_prices_hand_computed() {
        // returns ln 3, ln 5/3, ln 7/5, ln 9/7 divided by n = 4
        let daily = VolatilityEstimator::estimate(&[1.0, 3.0, 5.0, 7.0, 9.0], 1.0).unwrap();
        assert_relative_eq!(daily, 0.330_649_106_219_476_1, epsilon = 1e-12);

        let monthly = VolatilityEstimator::estimate(&[1.0, 3.0, 5.0, 7.0, 9.0], 30.0).unwrap();
        assert_relative_eq!(monthly, 1.811_039_740_953_288, epsilon = 1e-12);
    }

    #[test]
    fn test_horizon_scaling() {
        let prices = [100.0, 102.0, 99.0, 101.0, 103.0];
        let one = VolatilityEstimator::estimate(&prices, 1.0).unwrap();
        let thirty = VolatilityEstimator::estimate(&prices, 30.0).unwrap();
        assert_relative_eq!(thirty, one * 30.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_two_prices_zero() {
        assert_eq!(VolatilityEstimator::estimate(&[10.0, 11.0], 30.0).unwrap(), 0.0);
    }

    #[test]
    fn test_scale_invariant() {
        let a = [1.0, 1.1, 1.05, 1.2];
        let b: Vec<f64> = a.iter().map(|p| p * 250.0).collect();
        assert_relative_eq!(
            realized_volatility(&a, 7.0).unwrap(),
            realized_volatility(&b, 7.0).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            VolatilityEstimator::estimate(&[10.0], 30.0).unwrap_err(),
            AnalyticsError::InsufficientData { got: 1, need: 2 }
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(VolatilityEstimator::estimate(&[1.0, 2.0], 0.0)
            .unwrap_err()
            .is_invalid_parameter());
        assert!(VolatilityEstimator::estimate(&[1.0, -2.0], 1.0)
            .unwrap_err()
            .is_invalid_parameter());
        assert!(VolatilityEstimator::estimate(&[0.0, 2.0], 1.0).is_err());
    }

    #[test]
    fn test_log_returns() {
        let returns = log_returns(&[1.0, std::f64::consts::E]);
        assert_relative_eq!(returns[0], 1.0, epsilon = 1e-12);
    }
}
