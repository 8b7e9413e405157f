//! # quant_sim: Stochastic Price-Path Simulation
//!
//! ## Engine Layer Role
//!
//! quant_sim generates Monte Carlo price trajectories:
//! - Seeded normal-variate sampling (`rng`)
//! - Geometric Brownian Motion path simulation (`gbm`)
//! - Optional rayon parallelism across trials with per-trial generator streams
//!
//! ## Usage Example
//!
//! ```rust
//! use quant_sim::simulate;
//!
//! // 10 trials of 30 prices, zero drift, 1% per-step volatility
//! let paths = simulate(100.0, 30, 10, 0.0, 0.01, Some(42)).unwrap();
//! assert_eq!(paths.len(), 10);
//! assert!(paths.iter().all(|p| p.len() == 30 && p[0] == 100.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod gbm;
pub mod rng;

pub use gbm::{simulate, GbmParams, GbmPathSimulator, PricePathSet, SimulationConfig};
pub use rng::NormalSampler;
