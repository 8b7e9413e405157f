//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

use proptest::prelude::*;

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use quant_core::types::error::ensure_len;
    use quant_core::types::error::ensure_positive;
    use quant_core::types::error::AnalyticsError;

    assert!(ensure_positive("price", 1.0).is_ok());
    assert_eq!(
        ensure_len(0, 1),
        Err(AnalyticsError::InsufficientData { got: 0, need: 1 })
    );
}

/// Test that series types are accessible from the crate root.
#[test]
fn test_root_reexports() {
    use quant_core::{ForecastSet, OptionQuotePair, OptionQuoteSeries, PriceSeries};

    let series = PriceSeries::new(vec![1.0, 2.0]).unwrap();
    assert_eq!(series.len(), 2);

    let set = ForecastSet::new(vec![series.to_vec()]).unwrap();
    assert_eq!(set.horizon(), 2);

    let quotes = OptionQuoteSeries::from_pairs(&[OptionQuotePair::new(3.0, 4.0)]).unwrap();
    assert_eq!(quotes.pair_count(), 1);
}

proptest! {
    #[test]
    fn prop_quote_deinterleave_preserves_pairs(
        pairs in prop::collection::vec((0.01f64..1000.0, 0.01f64..1000.0), 1..50)
    ) {
        let flat: Vec<f64> = pairs.iter().flat_map(|&(c, p)| [c, p]).collect();
        let quotes = quant_core::OptionQuoteSeries::new(flat).unwrap();
        let calls: Vec<f64> = pairs.iter().map(|&(c, _)| c).collect();
        let puts: Vec<f64> = pairs.iter().map(|&(_, p)| p).collect();
        prop_assert_eq!(quotes.calls(), calls);
        prop_assert_eq!(quotes.puts(), puts);
    }

    #[test]
    fn prop_positive_prices_always_valid(
        values in prop::collection::vec(1e-6f64..1e6, 1..100)
    ) {
        prop_assert!(quant_core::PriceSeries::new(values).is_ok());
    }
}
