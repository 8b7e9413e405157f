//! Geometric Brownian Motion price-path simulation.
//!
//! # Architecture
//!
//! ```text
//! GbmPathSimulator
//! ├── SimulationConfig  (run shape, seed, parallel threshold)
//! ├── GbmParams         (initial price, drift, volatility)
//! ├── NormalSampler     (one stream per trial)
//! └── PricePathSet      (trials × steps result)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use quant_sim::gbm::{GbmParams, GbmPathSimulator, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .steps(30)
//!     .trials(10)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let paths = GbmPathSimulator::new(config)
//!     .simulate(GbmParams::new(100.0, 0.0, 1.0))
//!     .unwrap();
//!
//! for terminal in paths.terminal_prices() {
//!     assert!(terminal > 0.0);
//! }
//! ```

pub mod config;
pub mod params;
pub mod paths;
pub mod simulator;

pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use params::GbmParams;
pub use paths::PricePathSet;
pub use simulator::{simulate, GbmPathSimulator};
