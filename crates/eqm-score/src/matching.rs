//! Target-to-user band matching
//!
//! Matching is per target band with no removal: one user band may satisfy
//! several target bands.

use eqm_core::{Band, NormalizedBand};

use crate::result::ScoreMode;

/// Enhanced if any target band carries id, q or type; simple otherwise
pub fn detect_mode(target: &[Band]) -> ScoreMode {
    if target.iter().any(Band::has_extended_fields) {
        ScoreMode::Enhanced
    } else {
        ScoreMode::Simple
    }
}

/// First user band whose frequency equals `freq` exactly
pub fn exact_match(user: &[NormalizedBand], freq: f64) -> Option<&NormalizedBand> {
    user.iter().find(|band| band.freq == freq)
}

/// User band closest to `freq`, if any lies within `radius` Hz
///
/// Ties go to the earliest band. Bands at a non-finite distance never match.
pub fn nearest_within(user: &[NormalizedBand], freq: f64, radius: f64) -> Option<&NormalizedBand> {
    let mut best: Option<(&NormalizedBand, f64)> = None;
    for band in user {
        let distance = (band.freq - freq).abs();
        if !distance.is_finite() || distance > radius {
            continue;
        }
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((band, distance)),
        }
    }
    best.map(|(band, _)| band)
}
