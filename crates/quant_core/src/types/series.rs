//! Price series and forecast sets.

use std::ops::Deref;

use super::error::{AnalyticsError, Result};

/// Ordered sequence of strictly positive prices indexed by time step.
///
/// The invariant (non-empty, every value finite and positive) is checked
/// once at construction. Indicators take `&[f64]`, and `PriceSeries`
/// dereferences to a slice so it can be passed anywhere a slice is expected.
///
/// # Examples
///
/// ```
/// use quant_core::types::PriceSeries;
///
/// let series = PriceSeries::new(vec![100.0, 101.5, 99.8]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.first(), 100.0);
/// assert_eq!(series.last(), 99.8);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PriceSeries {
    values: Vec<f64>,
}

impl PriceSeries {
    /// Creates a validated series.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `values` is empty or contains a non-finite or
    /// non-positive price.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(AnalyticsError::invalid("series", "must not be empty"));
        }
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(v.is_finite() && v > 0.0))
        {
            return Err(AnalyticsError::invalid(
                "series",
                format!("price at index {} must be finite and positive, got {}", index, value),
            ));
        }
        Ok(Self { values })
    }

    /// First price.
    #[inline]
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Last price.
    #[inline]
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Borrows the underlying prices.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the series, returning the prices.
    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for PriceSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for PriceSeries {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = AnalyticsError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.values
    }
}

/// Non-empty set of forecasts sharing the same horizon length.
///
/// Forecast values are not required to be positive: a forecast of returns
/// or spreads aggregates the same way as a forecast of prices.
///
/// # Examples
///
/// ```
/// use quant_core::types::ForecastSet;
///
/// let set = ForecastSet::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(set.count(), 2);
/// assert_eq!(set.horizon(), 2);
///
/// assert!(ForecastSet::new(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ForecastSet {
    forecasts: Vec<Vec<f64>>,
    horizon: usize,
}

impl ForecastSet {
    /// Creates a validated forecast set.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the set is empty or the series lengths differ.
    pub fn new(forecasts: Vec<Vec<f64>>) -> Result<Self> {
        let horizon = validate_forecasts(&forecasts)?;
        Ok(Self { forecasts, horizon })
    }

    /// Number of forecasts in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.forecasts.len()
    }

    /// Common length of every forecast.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Iterates the forecasts in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.forecasts.iter().map(Vec::as_slice)
    }

    /// Borrows the forecasts.
    #[inline]
    pub fn as_slice(&self) -> &[Vec<f64>] {
        &self.forecasts
    }
}

/// Checks the forecast-set invariants and returns the common horizon.
pub fn validate_forecasts<S: AsRef<[f64]>>(forecasts: &[S]) -> Result<usize> {
    let mut lengths = forecasts.iter().map(|f| f.as_ref().len());
    let horizon = lengths
        .next()
        .ok_or_else(|| AnalyticsError::invalid("forecasts", "set must not be empty"))?;

    if let Some((offset, len)) = lengths.enumerate().find(|&(_, len)| len != horizon) {
        return Err(AnalyticsError::invalid(
            "forecasts",
            format!(
                "forecast {} has length {}, expected {}",
                offset + 1,
                len,
                horizon
            ),
        ));
    }
    Ok(horizon)
}
