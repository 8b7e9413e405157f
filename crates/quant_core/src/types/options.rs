//! Option quote series.
//!
//! Raw option prices arrive as one flat sequence alternating call, put,
//! call, put. Each consecutive pair was observed at the same strike and
//! expiry.

use super::error::{AnalyticsError, Result};

/// Matched call and put price observed at the same strike and expiry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuotePair {
    /// Call price.
    pub call: f64,
    /// Put price.
    pub put: f64,
}

impl OptionQuotePair {
    /// Creates a new pair.
    #[inline]
    pub fn new(call: f64, put: f64) -> Self {
        Self { call, put }
    }
}

/// Interleaved call/put price sequence of even, non-zero length.
///
/// # Examples
///
/// ```
/// use quant_core::types::OptionQuoteSeries;
///
/// let quotes = OptionQuoteSeries::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(quotes.calls(), vec![1.0, 3.0]);
/// assert_eq!(quotes.puts(), vec![2.0, 4.0]);
///
/// assert!(OptionQuoteSeries::new(vec![1.0, 2.0, 3.0]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionQuoteSeries {
    prices: Vec<f64>,
}

impl OptionQuoteSeries {
    /// Creates a validated quote series.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `prices` is empty or of odd length.
    pub fn new(prices: Vec<f64>) -> Result<Self> {
        validate_quotes(&prices)?;
        Ok(Self { prices })
    }

    /// Builds a series from already-matched pairs.
    pub fn from_pairs(pairs: &[OptionQuotePair]) -> Result<Self> {
        let prices = pairs.iter().flat_map(|p| [p.call, p.put]).collect();
        Self::new(prices)
    }

    /// Number of call/put pairs.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.prices.len() / 2
    }

    /// Iterates the quotes as matched pairs.
    pub fn pairs(&self) -> impl Iterator<Item = OptionQuotePair> + '_ {
        self.prices
            .chunks_exact(2)
            .map(|chunk| OptionQuotePair::new(chunk[0], chunk[1]))
    }

    /// Call prices (even indices).
    pub fn calls(&self) -> Vec<f64> {
        self.pairs().map(|p| p.call).collect()
    }

    /// Put prices (odd indices).
    pub fn puts(&self) -> Vec<f64> {
        self.pairs().map(|p| p.put).collect()
    }

    /// Borrows the raw interleaved prices.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }
}

/// Checks the quote-series invariant: non-empty and even length.
pub fn validate_quotes(prices: &[f64]) -> Result<()> {
    if prices.is_empty() {
        return Err(AnalyticsError::invalid(
            "option_prices",
            "must contain at least one call/put pair",
        ));
    }
    if prices.len() % 2 != 0 {
        return Err(AnalyticsError::invalid(
            "option_prices",
            format!(
                "length {} is odd; quotes must alternate call, put",
                prices.len()
            ),
        ));
    }
    Ok(())
}
