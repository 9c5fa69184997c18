//! Property-based tests for the additive decomposition.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated monthly series.

use poyang_seasonal::seasonality::{compute_trend, decompose, SeasonalDecomposer};
use poyang_seasonal::DecomposeError;
use proptest::prelude::*;

/// Strategy for a series together with a period no longer than it.
fn series_and_period(max_len: usize) -> impl Strategy<Value = (Vec<f64>, usize)> {
    (1..max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(-1000.0..1000.0_f64, len),
            1..=len,
        )
    })
}

/// Strategy for seasonal series with a linear trend.
fn seasonal_values_strategy(
    min_len: usize,
    max_len: usize,
    period: usize,
) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(move |len| {
        (0.0..100.0_f64, -1.0..1.0_f64, 5.0..20.0_f64).prop_map(move |(base, slope, amplitude)| {
            (0..len)
                .map(|i| {
                    base + slope * i as f64
                        + amplitude * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin()
                })
                .collect()
        })
    })
}

// =============================================================================
// Property: Component lengths match the input
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn components_have_input_length((series, period) in series_and_period(80)) {
        let result = decompose(&series, period as i64).unwrap();
        prop_assert_eq!(result.trend.len(), series.len());
        prop_assert_eq!(result.seasonal.len(), series.len());
        prop_assert_eq!(result.residual.len(), series.len());
    }

    #[test]
    fn components_reconstruct_series((series, period) in series_and_period(80)) {
        let result = decompose(&series, period as i64).unwrap();
        for (i, value) in result.reconstruct().iter().enumerate() {
            let tolerance = 1e-9 * series[i].abs().max(1.0);
            prop_assert!(
                (value - series[i]).abs() <= tolerance,
                "index {}: {} vs {}", i, value, series[i]
            );
        }
    }

    #[test]
    fn seasonal_is_strictly_periodic((series, period) in series_and_period(80)) {
        let result = decompose(&series, period as i64).unwrap();
        for i in 0..series.len() {
            prop_assert_eq!(result.seasonal[i], result.seasonal[i % period]);
        }

        let mut distinct: Vec<f64> = result.seasonal.clone();
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap());
        distinct.dedup();
        prop_assert!(distinct.len() <= period);
    }

    #[test]
    fn finite_input_gives_finite_components((series, period) in series_and_period(80)) {
        let result = decompose(&series, period as i64).unwrap();
        prop_assert!(result.trend.iter().all(|v| v.is_finite()));
        prop_assert!(result.seasonal.iter().all(|v| v.is_finite()));
        prop_assert!(result.residual.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn decomposition_is_deterministic((series, period) in series_and_period(60)) {
        let first = decompose(&series, period as i64).unwrap();
        let second = SeasonalDecomposer::new(period).decompose(&series).unwrap();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Property: Constant series decompose to flat components
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn constant_series_is_all_trend(
        c in -500.0..500.0_f64,
        len in 1usize..60,
        period in 1usize..=24,
    ) {
        let series = vec![c; len];
        let result = decompose(&series, period as i64).unwrap();
        for i in 0..len {
            prop_assert!((result.trend[i] - c).abs() < 1e-9);
            prop_assert!(result.seasonal[i].abs() < 1e-9);
            prop_assert!(result.residual[i].abs() < 1e-9);
        }
    }

    #[test]
    fn non_positive_period_rejected(
        series in prop::collection::vec(0.0..10.0_f64, 1..30),
        period in i64::MIN..=0,
    ) {
        prop_assert_eq!(
            decompose(&series, period).unwrap_err(),
            DecomposeError::InvalidPeriod(period)
        );
    }

    #[test]
    fn seasonal_series_has_strong_seasonality(values in seasonal_values_strategy(48, 120, 12)) {
        let result = decompose(&values, 12).unwrap();
        prop_assert!(result.seasonal_strength() > 0.5);
    }
}

// =============================================================================
// Property: Trend window never reaches outside the series
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn edge_windows_are_clamped(
        series in prop::collection::vec(-100.0..100.0_f64, 1..50),
        window in 1usize..30,
    ) {
        let n = series.len();
        let half = window / 2;
        let trend = compute_trend(&series, window);

        let head = &series[..=half.min(n - 1)];
        let head_mean = head.iter().sum::<f64>() / head.len() as f64;
        prop_assert!((trend[0] - head_mean).abs() < 1e-9);

        let tail = &series[n.saturating_sub(half + 1)..];
        let tail_mean = tail.iter().sum::<f64>() / tail.len() as f64;
        prop_assert!((trend[n - 1] - tail_mean).abs() < 1e-9);
    }
}

#[test]
fn empty_series_rejected_for_any_period() {
    for period in [-1, 0, 1, 12] {
        assert!(decompose(&[], period).unwrap_err().is_invalid_input());
    }
}
