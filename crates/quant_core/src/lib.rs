//! # quant_core: Foundation Types for the Quant Analytics Toolkit
//!
//! ## Foundation Layer Role
//!
//! quant_core is the bottom layer of the workspace, providing:
//! - Validated input types: `PriceSeries`, `ForecastSet`, `OptionQuoteSeries` (`types`)
//! - The shared error type `AnalyticsError` and `Result` alias (`types::error`)
//!
//! It has no dependencies on other quant_* crates. External dependencies:
//! - thiserror: error derives
//! - serde: serialisation support (optional, default)
//!
//! ## Usage Examples
//!
//! ```rust
//! use quant_core::types::{AnalyticsError, OptionQuoteSeries, PriceSeries};
//!
//! let prices = PriceSeries::new(vec![100.0, 101.0, 102.5]).unwrap();
//! assert_eq!(prices.len(), 3);
//!
//! let err = OptionQuoteSeries::new(vec![1.0, 2.0, 3.0]).unwrap_err();
//! assert!(matches!(err, AnalyticsError::InvalidParameter { .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for the series types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{
    AnalyticsError, ForecastSet, OptionQuotePair, OptionQuoteSeries, PriceSeries, Result,
};
