//! Core series and error types.
//!
//! This module provides:
//! - `error`: `AnalyticsError` and the shared validation helpers
//! - `series`: `PriceSeries` and `ForecastSet`
//! - `options`: `OptionQuotePair` and `OptionQuoteSeries`
//!
//! # Re-exports
//!
//! - [`AnalyticsError`], [`Result`] from `error`
//! - [`PriceSeries`], [`ForecastSet`] from `series`
//! - [`OptionQuotePair`], [`OptionQuoteSeries`] from `options`

pub mod error;
pub mod options;
pub mod series;

pub use error::{AnalyticsError, Result};
pub use options::{OptionQuotePair, OptionQuoteSeries};
pub use series::{ForecastSet, PriceSeries};
