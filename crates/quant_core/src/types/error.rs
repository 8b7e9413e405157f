//! Error types for structured error handling.
//!
//! Every public analytics operation validates its inputs eagerly and fails
//! with one of two kinds:
//! - `InvalidParameter`: a parameter or input shape outside its domain
//! - `InsufficientData`: a series shorter than the required lookback

use thiserror::Error;

/// Categorised analytics errors.
///
/// # Examples
/// ```
/// use quant_core::types::AnalyticsError;
///
/// let err = AnalyticsError::InsufficientData { got: 3, need: 15 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient data: got 3 points, need at least 15"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// Parameter outside its valid domain, or malformed input shape.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// Series shorter than the minimum required length.
    #[error("Insufficient data: got {got} points, need at least {need}")]
    InsufficientData {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points required.
        need: usize,
    },
}

impl AnalyticsError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Creates an `InsufficientData` error.
    pub fn insufficient(got: usize, need: usize) -> Self {
        Self::InsufficientData { got, need }
    }

    /// Returns `true` for `InvalidParameter`.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns `true` for `InsufficientData`.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

/// Result alias used throughout the toolkit.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Fails with `InvalidParameter` unless `value` is finite and strictly positive.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalyticsError::invalid(
            name,
            format!("must be finite and positive, got {}", value),
        ))
    }
}

/// Fails with `InvalidParameter` unless `value` is finite.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticsError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Fails with `InsufficientData` when `len < need`.
pub fn ensure_len(len: usize, need: usize) -> Result<()> {
    if len < need {
        Err(AnalyticsError::insufficient(len, need))
    } else {
        Ok(())
    }
}
