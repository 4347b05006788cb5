// ============================================================================
// EQ Match Curve Regression Tests
// Pins the sampled shape of the display curve across code changes
// ============================================================================

//! Curve Regression Test Suite
//!
//! The response model is a heuristic; these golden values catch any change
//! to its shape.

use approx::assert_abs_diff_eq;
use eqm_core::{Band, FilterType};
use eqm_curve::{CurveConfig, compare_curves, curve, curve_with};

// ============================================================================
// TEST UTILITIES
// ============================================================================

/// Mixed band set touching four filter types
fn mixed_bands() -> Vec<Band> {
    vec![
        Band::new(120.0, 3.0).with_q(0.7).with_type(FilterType::LowShelf),
        Band::new(1000.0, -4.0).with_q(2.0).with_type(FilterType::Peak),
        Band::new(3500.0, 5.0).with_q(4.0).with_type(FilterType::Notch),
        Band::new(40.0, 6.0).with_q(1.0).with_type(FilterType::HighPass),
    ]
}

// ============================================================================
// GOLDEN VALUES
// ============================================================================

#[test]
fn test_mixed_curve_golden_values() {
    let points = curve(&mixed_bands());
    assert_eq!(points.len(), 100);

    let golden = [
        (0, 20.0, 4.48080370642854),
        (10, 40.18466005130094, 8.972035617926897),
        (33, 200.0, 6.7429880765701835),
        (50, 654.9098325755459, 4.943609948602521),
        (66, 2000.0, 5.301944818046502),
        (80, 5312.175565893372, 5.500517581225918),
        (99, 20000.0, 5.946750849923281),
    ];

    for (index, freq, gain) in golden {
        assert_abs_diff_eq!(points[index].freq_hz, freq, epsilon = 1e-6);
        assert_abs_diff_eq!(points[index].gain_db, gain, epsilon = 1e-9);
    }
}

#[test]
fn test_curve_is_deterministic() {
    let a = curve(&mixed_bands());
    let b = curve(&mixed_bands());
    assert_eq!(a, b);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_clamped_for_every_filter_type() {
    for filter_type in FilterType::ALL {
        for gain in [-40.0, -12.0, 0.0, 12.0, 40.0] {
            let bands = vec![
                Band::new(500.0, gain).with_type(filter_type),
                Band::new(600.0, gain).with_q(0.2).with_type(filter_type),
            ];
            for point in curve(&bands) {
                assert!(
                    (-12.0..=12.0).contains(&point.gain_db),
                    "{:?} gain {} produced {} dB at {} Hz",
                    filter_type,
                    gain,
                    point.gain_db,
                    point.freq_hz
                );
            }
        }
    }
}

#[test]
fn test_zero_gain_is_flat() {
    let bands: Vec<Band> = FilterType::ALL
        .iter()
        .map(|t| Band::new(1000.0, 0.0).with_type(*t))
        .collect();
    assert!(curve(&bands).iter().all(|p| p.gain_db == 0.0));
}

#[test]
fn test_unset_fields_match_defaults() {
    let implicit = curve(&[Band::new(800.0, 5.0)]);
    let explicit = curve(&[Band::new(800.0, 5.0).with_q(1.0).with_type(FilterType::Peak)]);
    assert_eq!(implicit, explicit);
}

#[test]
fn test_custom_grid() {
    let config = CurveConfig::default()
        .with_num_points(11)
        .with_freq_range(100.0, 10000.0)
        .with_clamp_db(3.0);
    let points = curve_with(&[Band::new(1000.0, 6.0)], &config);
    assert_eq!(points.len(), 11);
    assert_abs_diff_eq!(points[5].freq_hz, 1000.0, epsilon = 1e-9);
    assert_eq!(points[5].gain_db, 3.0);
}

#[test]
fn test_shifted_peak_differs_most_near_peaks() {
    let target = curve(&[Band::new(1000.0, 6.0).with_q(2.0)]);
    let user = curve(&[Band::new(1200.0, 6.0).with_q(2.0)]);
    let cmp = compare_curves(&user, &target);
    assert!(cmp.max_abs_diff_db > 0.0);
    assert!(cmp.max_diff_freq_hz > 500.0 && cmp.max_diff_freq_hz < 2500.0);
}
