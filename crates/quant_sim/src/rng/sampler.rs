//! Seeded normal-variate sampler for path simulation.
//!
//! This module provides [`NormalSampler`], a PRNG wrapper producing
//! Normal(mean, stddev²) variates with reproducible seeding.

use quant_core::types::error::{ensure_finite, AnalyticsError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Golden-ratio increment used by SplitMix64.
const SPLITMIX_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Normal random variate generator.
///
/// Wraps `StdRng` and draws standard normals with the Ziggurat algorithm
/// (`rand_distr::StandardNormal`), then scales and shifts them.
///
/// All sampling methods take `&mut self`. A sampler can be moved to another
/// thread but never shared between threads without an external lock; the
/// simulator gives each trial its own instance via [`NormalSampler::stream`].
///
/// # Examples
///
/// ```rust
/// use quant_sim::rng::NormalSampler;
///
/// let mut sampler = NormalSampler::from_seed(42);
///
/// let x = sampler.sample(100.0, 5.0).unwrap();
/// assert!(x.is_finite());
///
/// // Zero standard deviation is rejected
/// assert!(sampler.sample(0.0, 0.0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct NormalSampler {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// Seed used for initialisation, if known.
    seed: Option<u64>,
}

impl NormalSampler {
    /// Creates a sampler initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// ```rust
    /// use quant_sim::rng::NormalSampler;
    ///
    /// let mut a = NormalSampler::from_seed(12345);
    /// let mut b = NormalSampler::from_seed(12345);
    /// assert_eq!(a.gen_standard_normal(), b.gen_standard_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a sampler seeded from the operating system's entropy source.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Derives the sampler for stream `index` of a run seeded with `seed`.
    ///
    /// Streams with different indices are seeded through SplitMix64 so
    /// adjacent indices do not yield correlated `StdRng` states.
    #[inline]
    pub fn stream(seed: u64, index: u64) -> Self {
        Self::from_seed(splitmix64(
            seed ^ index.wrapping_add(1).wrapping_mul(SPLITMIX_GAMMA),
        ))
    }

    /// Returns the seed used for initialisation, `None` for entropy-seeded samplers.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws one variate from Normal(mean, stddev²).
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `stddev` is not strictly positive and finite,
    /// or if `mean` is not finite.
    #[inline]
    pub fn sample(&mut self, mean: f64, stddev: f64) -> Result<f64> {
        ensure_finite("mean", mean)?;
        if !(stddev.is_finite() && stddev > 0.0) {
            return Err(AnalyticsError::invalid(
                "stddev",
                format!("must be finite and positive, got {}", stddev),
            ));
        }
        Ok(mean + stddev * self.gen_standard_normal())
    }

    /// Draws one standard normal variate (mean 0, stddev 1).
    #[inline]
    pub fn gen_standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; empty buffers are a no-op.
    #[inline]
    pub fn fill_standard_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

/// SplitMix64 finaliser.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(SPLITMIX_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_reproducibility() {
        let mut a = NormalSampler::from_seed(7);
        let mut b = NormalSampler::from_seed(7);
        for _ in 0..100 {
            assert_eq!(a.sample(1.0, 2.0).unwrap(), b.sample(1.0, 2.0).unwrap());
        }
        assert_eq!(a.seed(), Some(7));
    }

    #[test]
    fn test_entropy_has_no_seed() {
        let mut sampler = NormalSampler::from_entropy();
        assert_eq!(sampler.seed(), None);
        assert!(sampler.gen_standard_normal().is_finite());
    }

    #[test]
    fn test_invalid_stddev() {
        let mut sampler = NormalSampler::from_seed(1);
        for stddev in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = sampler.sample(0.0, stddev).unwrap_err();
            assert!(matches!(
                err,
                AnalyticsError::InvalidParameter { name: "stddev", .. }
            ));
        }
    }

    #[test]
    fn test_invalid_mean() {
        let mut sampler = NormalSampler::from_seed(1);
        assert!(sampler.sample(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_streams_differ() {
        let mut s0 = NormalSampler::stream(42, 0);
        let mut s1 = NormalSampler::stream(42, 1);
        let a: Vec<f64> = (0..10).map(|_| s0.gen_standard_normal()).collect();
        let b: Vec<f64> = (0..10).map(|_| s1.gen_standard_normal()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_streams_reproducible() {
        let mut a = NormalSampler::stream(42, 3);
        let mut b = NormalSampler::stream(42, 3);
        assert_eq!(a.gen_standard_normal(), b.gen_standard_normal());
    }

    #[test]
    fn test_fill_empty_buffer() {
        let mut sampler = NormalSampler::from_seed(42);
        let mut empty: Vec<f64> = vec![];
        sampler.fill_standard_normal(&mut empty);
    }

    #[test]
    fn test_sample_moments() {
        let mut sampler = NormalSampler::from_seed(2024);
        let n = 200_000;
        let draws: Vec<f64> = (0..n).map(|_| sampler.sample(5.0, 2.0).unwrap()).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        assert!((mean - 5.0).abs() < 0.02, "mean {}", mean);
        assert!((var - 4.0).abs() < 0.06, "variance {}", var);
    }
}
