//! # Random Variate Generation
//!
//! Normal-variate sampling for the price-path simulator.
//!
//! ## Design
//!
//! - **Reproducibility**: every sampler can be seeded for deterministic sequences
//! - **Explicit state**: the generator is an owned value passed to the
//!   simulator, never hidden global state
//! - **Parallel safety**: per-trial streams are derived from the run seed, so
//!   workers never share a generator
//!
//! ## Usage Example
//!
//! ```rust
//! use quant_sim::rng::NormalSampler;
//!
//! let mut sampler = NormalSampler::from_seed(12345);
//!
//! // Normal(mean = 0.001, stddev = 0.02)
//! let shock = sampler.sample(0.001, 0.02).unwrap();
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! sampler.fill_standard_normal(&mut buffer);
//! # assert!(shock.is_finite());
//! ```

mod sampler;

pub use sampler::NormalSampler;

#[cfg(test)]
mod tests;
