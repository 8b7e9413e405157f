//! Statistical properties of the normal sampler.

use super::*;
use proptest::prelude::*;

/// Same seed, same batch.
#[test]
fn test_batch_reproducibility() {
    let mut a = NormalSampler::from_seed(99);
    let mut b = NormalSampler::from_seed(99);
    let mut buf_a = vec![0.0; 256];
    let mut buf_b = vec![0.0; 256];
    a.fill_standard_normal(&mut buf_a);
    b.fill_standard_normal(&mut buf_b);
    assert_eq!(buf_a, buf_b);
}

/// Batch fill and single draws consume the stream identically.
#[test]
fn test_batch_matches_single_draws() {
    let mut a = NormalSampler::from_seed(5);
    let mut b = NormalSampler::from_seed(5);
    let mut buffer = vec![0.0; 16];
    a.fill_standard_normal(&mut buffer);
    for &value in &buffer {
        assert_eq!(value, b.gen_standard_normal());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Standard normal moments hold for arbitrary seeds.
    #[test]
    fn prop_standard_normal_moments(seed in any::<u64>()) {
        let mut sampler = NormalSampler::from_seed(seed);
        let sample_size = 20_000;
        let mut buffer = vec![0.0; sample_size];
        sampler.fill_standard_normal(&mut buffer);

        let mean: f64 = buffer.iter().sum::<f64>() / sample_size as f64;
        let variance: f64 = buffer.iter()
            .map(|&x| (x - mean).powi(2))
            .sum::<f64>() / (sample_size - 1) as f64;

        prop_assert!(mean.abs() < 0.05, "mean {:.4} (seed={})", mean, seed);
        prop_assert!((variance - 1.0).abs() < 0.1, "variance {:.4} (seed={})", variance, seed);
    }

    /// Scaling and shifting honours the requested parameters.
    #[test]
    fn prop_sample_is_affine_in_standard_normal(
        seed in any::<u64>(),
        mean in -100.0f64..100.0,
        stddev in 0.001f64..50.0,
    ) {
        let mut a = NormalSampler::from_seed(seed);
        let mut b = NormalSampler::from_seed(seed);
        let x = a.sample(mean, stddev).unwrap();
        let z = b.gen_standard_normal();
        prop_assert!((x - (mean + stddev * z)).abs() <= 1e-9 * (1.0 + x.abs()));
    }
}
