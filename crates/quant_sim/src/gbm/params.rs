//! Geometric Brownian Motion model parameters.

use quant_core::types::error::{ensure_finite, ensure_positive, AnalyticsError, Result};

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// Prices follow
/// ```text
/// dS = μ S dt + σ S dW
/// ```
/// discretised exactly in log space with a unit time step:
/// ```text
/// S[j] = S[j-1] × exp(z),   z ~ N(μ - ½σ², σ)
/// ```
///
/// `drift` (μ) and `volatility` (σ) are expressed per step.
///
/// # Examples
///
/// ```rust
/// use quant_sim::gbm::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.0005, 0.01);
/// assert!(params.validate().is_ok());
/// assert!(GbmParams::new(-1.0, 0.0, 0.01).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial price (S₀).
    pub initial_price: f64,
    /// Drift per step (μ).
    pub drift: f64,
    /// Volatility per step (σ).
    pub volatility: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(initial_price: f64, drift: f64, volatility: f64) -> Self {
        Self {
            initial_price,
            drift,
            volatility,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the initial price is not finite and positive,
    /// the drift is not finite, or the volatility is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("initial_price", self.initial_price)?;
        ensure_finite("drift", self.drift)?;
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(AnalyticsError::invalid(
                "volatility",
                format!("must be finite and non-negative, got {}", self.volatility),
            ));
        }
        Ok(())
    }

    /// Mean of the log-return shock, `μ - ½σ²`.
    #[inline]
    pub fn shock_mean(&self) -> f64 {
        self.drift - 0.5 * self.volatility * self.volatility
    }

    /// Standard deviation of the log-return shock, `σ`.
    #[inline]
    pub fn shock_stddev(&self) -> f64 {
        self.volatility
    }

    /// Returns `true` when the model has no diffusion term.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.volatility == 0.0
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            drift: 0.0,
            volatility: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gbm_params_default() {
        let params = GbmParams::default();
        assert_eq!(params.initial_price, 100.0);
        assert_eq!(params.drift, 0.0);
        assert_eq!(params.volatility, 0.01);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_gbm_params_validation() {
        assert!(GbmParams::new(0.0, 0.0, 0.2).validate().is_err()); // zero price
        assert!(GbmParams::new(-100.0, 0.0, 0.2).validate().is_err()); // negative price
        assert!(GbmParams::new(100.0, 0.0, -0.2).validate().is_err()); // negative vol
        assert!(GbmParams::new(f64::NAN, 0.0, 0.2).validate().is_err()); // NaN price
        assert!(GbmParams::new(100.0, f64::INFINITY, 0.2).validate().is_err()); // inf drift
        assert!(GbmParams::new(100.0, 0.0, 0.0).validate().is_ok()); // no diffusion
    }

    #[test]
    fn test_shock_moments() {
        let params = GbmParams::new(100.0, 0.05, 0.2);
        assert_relative_eq!(params.shock_mean(), 0.03, epsilon = 1e-12);
        assert_eq!(params.shock_stddev(), 0.2);
        assert!(!params.is_deterministic());
        assert!(GbmParams::new(100.0, 0.05, 0.0).is_deterministic());
    }
}
