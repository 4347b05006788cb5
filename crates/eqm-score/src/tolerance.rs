//! Shared tolerance scoring
//!
//! Every component score in both modes goes through [`tolerance_score`], so
//! the boundary behaves the same everywhere.

/// Full marks
pub const MAX_SCORE: f64 = 100.0;

/// 100 within `tolerance`, then a linear decay of `penalty_rate` per unit, floored at 0
///
/// Non-finite errors score 0.
pub fn tolerance_score(error: f64, tolerance: f64, penalty_rate: f64) -> f64 {
    if !error.is_finite() {
        return 0.0;
    }
    let error = error.abs();
    if error <= tolerance {
        MAX_SCORE
    } else {
        (MAX_SCORE - penalty_rate * (error - tolerance)).max(0.0)
    }
}

/// Clamp to 0..=100 and round to the nearest integer
#[inline]
pub fn to_points(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.clamp(0.0, MAX_SCORE).round() as u8
}
