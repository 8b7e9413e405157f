//! # quant_signals: Indicators and Volatility Estimation
//!
//! ## Analytics Layer Role
//!
//! quant_signals turns price histories into trading signals:
//! - RSI-style momentum oscillator with Wilder smoothing (`momentum`)
//! - Parabolic-SAR-style trailing stop for uptrends (`trend_stop`)
//! - Consensus of independent forecasts (`forecast`)
//! - Horizon-scaled realised volatility (`volatility`)
//! - Volatility index from interleaved call/put quotes (`vix`)
//!
//! Every operation is a pure function of its inputs and validates them
//! eagerly, failing with [`quant_core::AnalyticsError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use quant_signals::{momentum_oscillator, trend_stop, volatility_index};
//!
//! let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
//! assert_eq!(momentum_oscillator(&prices, 14).unwrap(), 100.0);
//!
//! let stops = trend_stop(&prices, 0.02, 0.2).unwrap();
//! assert_eq!(stops.len(), prices.len());
//!
//! let quotes = [5.0, 4.0, 5.5, 3.5, 5.2, 4.2];
//! assert!(volatility_index(&quotes, 30.0).unwrap() > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod forecast;
pub mod momentum;
pub mod trend_stop;
pub mod vix;
pub mod volatility;

pub use forecast::{aggregate_forecasts, ForecastAggregator};
pub use momentum::{momentum_oscillator, MomentumOscillator, MomentumZone, DEFAULT_PERIOD};
pub use trend_stop::{trend_stop, TrendStop, DEFAULT_ACCEL_MAX, DEFAULT_ACCEL_STEP};
pub use vix::{volatility_index, VolatilityIndexCalculator};
pub use volatility::{realized_volatility, VolatilityEstimator};
