//! Informal curve comparison
//!
//! Used for visual feedback only; the scorer never looks at curves.

use eqm_core::Band;
use serde::{Deserialize, Serialize};

use crate::config::CurveConfig;
use crate::curve::{CurvePoint, curve_with};

/// Floor for relative-error denominators (dB)
const RELATIVE_FLOOR_DB: f64 = 1.0;

/// Difference metrics between two curves sampled on the same grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveComparison {
    /// Mean absolute gain difference (dB)
    pub mean_abs_diff_db: f64,

    /// Maximum absolute gain difference (dB)
    pub max_abs_diff_db: f64,

    /// Frequency (Hz) with maximum difference
    pub max_diff_freq_hz: f64,

    /// Mean of |a - b| / max(|b|, 1 dB)
    pub mean_relative_error: f64,

    /// Number of points compared
    pub num_points: usize,
}

impl CurveComparison {
    fn zero() -> Self {
        Self {
            mean_abs_diff_db: 0.0,
            max_abs_diff_db: 0.0,
            max_diff_freq_hz: 0.0,
            mean_relative_error: 0.0,
            num_points: 0,
        }
    }

    /// Whether every point lies within `tolerance_db`
    pub fn within(&self, tolerance_db: f64) -> bool {
        self.max_abs_diff_db <= tolerance_db
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Curve diff: {:.2} dB avg, {:.2} dB max at {:.0} Hz, relative error {:.3} ({} points)",
            self.mean_abs_diff_db,
            self.max_abs_diff_db,
            self.max_diff_freq_hz,
            self.mean_relative_error,
            self.num_points
        )
    }
}

/// Compare `test` against `reference` over their common prefix
pub fn compare_curves(test: &[CurvePoint], reference: &[CurvePoint]) -> CurveComparison {
    let len = test.len().min(reference.len());
    if len == 0 {
        return CurveComparison::zero();
    }
    if test.len() != reference.len() {
        log::warn!(
            "comparing curves of different lengths ({} vs {}), using first {} points",
            test.len(),
            reference.len(),
            len
        );
    }

    let mut sum_abs = 0.0;
    let mut sum_rel = 0.0;
    let mut max_abs = 0.0;
    let mut max_freq = reference[0].freq_hz;

    for (t, r) in test.iter().zip(reference.iter()).take(len) {
        let diff = (t.gain_db - r.gain_db).abs();
        sum_abs += diff;
        sum_rel += diff / r.gain_db.abs().max(RELATIVE_FLOOR_DB);
        if diff > max_abs {
            max_abs = diff;
            max_freq = r.freq_hz;
        }
    }

    CurveComparison {
        mean_abs_diff_db: sum_abs / len as f64,
        max_abs_diff_db: max_abs,
        max_diff_freq_hz: max_freq,
        mean_relative_error: sum_rel / len as f64,
        num_points: len,
    }
}

/// Evaluate both band sets on the same grid and compare them
///
/// An empty band set is compared as a flat 0 dB line.
pub fn compare_band_sets(user: &[Band], target: &[Band], config: &CurveConfig) -> CurveComparison {
    compare_curves(&sampled_or_flat(user, config), &sampled_or_flat(target, config))
}

fn sampled_or_flat(bands: &[Band], config: &CurveConfig) -> Vec<CurvePoint> {
    if bands.is_empty() {
        config
            .frequencies()
            .into_iter()
            .map(|freq_hz| CurvePoint {
                freq_hz,
                gain_db: 0.0,
            })
            .collect()
    } else {
        curve_with(bands, config)
    }
}
