//! Aggregate EQ curve evaluation

use eqm_core::{Band, NormalizedBand, normalize_all};
use serde::{Deserialize, Serialize};

use crate::config::CurveConfig;
use crate::response::contribution;

/// Id prefix for bands that reach the evaluator without one
const BAND_PREFIX: &str = "band";

/// One sampled point of a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    #[serde(rename = "freqHz")]
    pub freq_hz: f64,
    #[serde(rename = "gainDb")]
    pub gain_db: f64,
}

/// Curve with the default 100 log-spaced points between 20 Hz and 20 kHz
pub fn curve(bands: &[Band]) -> Vec<CurvePoint> {
    curve_with(bands, &CurveConfig::default())
}

/// Curve with explicit sampling configuration
///
/// An empty band list produces an empty curve, not a flat one.
pub fn curve_with(bands: &[Band], config: &CurveConfig) -> Vec<CurvePoint> {
    if bands.is_empty() {
        return Vec::new();
    }

    let bands = normalize_all(bands, BAND_PREFIX);
    let points: Vec<CurvePoint> = config
        .frequencies()
        .into_iter()
        .map(|freq_hz| CurvePoint {
            freq_hz,
            gain_db: response_at(&bands, freq_hz).clamp(-config.clamp_db, config.clamp_db),
        })
        .collect();

    log::trace!(
        "evaluated {}-band curve over {} points",
        bands.len(),
        points.len()
    );
    points
}

/// Unclamped summed gain (dB) of `bands` at `freq`
pub fn response_at(bands: &[NormalizedBand], freq: f64) -> f64 {
    bands.iter().map(|band| contribution(band, freq)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use eqm_core::FilterType;

    #[test]
    fn test_empty_bands() {
        assert!(curve(&[]).is_empty());
    }

    #[test]
    fn test_point_count_and_range() {
        let points = curve(&[Band::new(1000.0, 3.0)]);
        assert_eq!(points.len(), 100);
        assert_eq!(points[0].freq_hz, 20.0);
        assert_relative_eq!(points[99].freq_hz, 20000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_clamp() {
        let bands = vec![
            Band::new(1000.0, 12.0),
            Band::new(1000.0, 12.0),
            Band::new(100.0, -30.0).with_type(FilterType::LowShelf),
        ];
        for point in curve(&bands) {
            assert!(point.gain_db >= -12.0 && point.gain_db <= 12.0);
        }
        let config = CurveConfig::default().with_num_points(1).with_freq_range(1000.0, 1000.0);
        assert_eq!(curve_with(&bands[..2], &config)[0].gain_db, 12.0);
    }

    #[test]
    fn test_bands_sum() {
        let bands = normalize_all(
            &[Band::new(1000.0, 3.0), Band::new(1000.0, 2.0)],
            "b",
        );
        assert_relative_eq!(response_at(&bands, 1000.0), 5.0);
    }

    #[test]
    fn test_response_at_is_unclamped() {
        let bands = normalize_all(&[Band::new(1000.0, 20.0)], "b");
        assert_relative_eq!(response_at(&bands, 1000.0), 20.0);
    }

    #[test]
    fn test_serialized_point_names() {
        let json = serde_json::to_string(&CurvePoint {
            freq_hz: 20.0,
            gain_db: 1.5,
        })
        .unwrap();
        assert_eq!(json, r#"{"freqHz":20.0,"gainDb":1.5}"#);
    }
}
