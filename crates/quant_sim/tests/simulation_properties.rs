//! Property tests for the public simulation API.

use proptest::prelude::*;
use quant_sim::{simulate, GbmParams, GbmPathSimulator, NormalSampler, SimulationConfig};

#[test]
fn test_zero_drift_zero_volatility_is_constant() {
    let paths = simulate(87.5, 25, 6, 0.0, 0.0, Some(1)).unwrap();
    assert_eq!(paths, vec![vec![87.5; 25]; 6]);
}

#[test]
fn test_demo_run_shape() {
    // 10 simulations of 30 daily steps with unit-variance log shocks
    let paths = simulate(100.0, 30, 10, 0.0, 1.0, Some(2024)).unwrap();
    assert_eq!(paths.len(), 10);
    for path in &paths {
        assert_eq!(path.len(), 30);
        assert!(path.iter().all(|&p| p > 0.0));
    }
}

#[test]
fn test_explicit_sampler_is_reproducible() {
    let config = SimulationConfig::builder().steps(12).trials(4).build().unwrap();
    let simulator = GbmPathSimulator::new(config);
    let params = GbmParams::new(10.0, 0.0, 0.03);

    let a = simulator
        .simulate_with(&mut NormalSampler::from_seed(77), params)
        .unwrap();
    let b = simulator
        .simulate_with(&mut NormalSampler::from_seed(77), params)
        .unwrap();
    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_constant_without_shocks(
        p0 in 0.01f64..10_000.0,
        steps in 1usize..60,
        trials in 1usize..20,
    ) {
        let paths = simulate(p0, steps, trials, 0.0, 0.0, None).unwrap();
        prop_assert_eq!(paths.len(), trials);
        for path in &paths {
            prop_assert_eq!(path.len(), steps);
            prop_assert!(path.iter().all(|&p| p == p0));
        }
    }

    #[test]
    fn prop_prices_strictly_positive(
        seed in any::<u64>(),
        drift in -0.05f64..0.05,
        volatility in 0.0f64..0.5,
    ) {
        let paths = simulate(100.0, 40, 8, drift, volatility, Some(seed)).unwrap();
        for path in &paths {
            prop_assert_eq!(path[0], 100.0);
            prop_assert!(path.iter().all(|&p| p > 0.0 && p.is_finite()));
        }
    }

    #[test]
    fn prop_seeded_runs_reproduce(seed in any::<u64>()) {
        let a = simulate(50.0, 10, 5, 0.001, 0.02, Some(seed)).unwrap();
        let b = simulate(50.0, 10, 5, 0.001, 0.02, Some(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
