//! Main scoring API

use eqm_core::{Band, EqmError, EqmResult, NormalizedBand, normalize_all};
use serde::Deserialize;
use serde_json::Value;

use crate::config::ScoreConfig;
use crate::matching::{detect_mode, exact_match, nearest_within};
use crate::result::{BandResult, EqScore, ScoreMode};
use crate::tolerance::{to_points, tolerance_score};

const USER_PREFIX: &str = "user";
const TARGET_PREFIX: &str = "target";

/// EQ band-set scorer
pub struct EqScorer;

impl EqScorer {
    /// Score `user` against `target`
    ///
    /// An empty target set scores 0 with no per-band entries.
    pub fn score(user: &[Band], target: &[Band], config: &ScoreConfig) -> EqScore {
        let mode = detect_mode(target);
        if target.is_empty() {
            log::debug!("empty target set, score is 0");
            return EqScore::empty(mode);
        }

        let user = normalize_all(user, USER_PREFIX);
        let target = normalize_all(target, TARGET_PREFIX);

        let per_band = match mode {
            ScoreMode::Simple => Self::score_simple(&user, &target, config),
            ScoreMode::Enhanced => Self::score_enhanced(&user, &target, config),
        };

        let mean = per_band.iter().map(|b| b.score as f64).sum::<f64>() / per_band.len() as f64;
        let total = to_points(mean);

        log::debug!(
            "scored {} user bands against {} targets in {:?} mode: {}",
            user.len(),
            target.len(),
            mode,
            total
        );

        EqScore {
            total,
            per_band,
            mode,
        }
    }

    /// Score JSON values, rejecting anything that is not an array of bands
    ///
    /// Both arguments are checked before any band is parsed.
    pub fn score_values(user: &Value, target: &Value, config: &ScoreConfig) -> EqmResult<EqScore> {
        let user = expect_array(user, "userBands")?;
        let target = expect_array(target, "targetBands")?;

        let user = parse_bands(user)?;
        let target = parse_bands(target)?;

        Ok(Self::score(&user, &target, config))
    }

    fn score_simple(
        user: &[NormalizedBand],
        target: &[NormalizedBand],
        config: &ScoreConfig,
    ) -> Vec<BandResult> {
        target
            .iter()
            .map(|t| match exact_match(user, t.freq) {
                Some(u) => {
                    let delta_db = u.gain_db - t.gain_db;
                    let score = to_points(tolerance_score(
                        delta_db,
                        config.tol_db,
                        config.penalty_per_db,
                    ));
                    log::trace!(
                        "{} matched {} exactly, delta {:+.2} dB, score {}",
                        t.id,
                        u.id,
                        delta_db,
                        score
                    );
                    BandResult {
                        id: t.id.clone(),
                        freq: t.freq,
                        delta_db,
                        delta_freq: None,
                        delta_q: None,
                        score,
                        matched_id: Some(u.id.clone()),
                    }
                }
                None => {
                    log::trace!("{} at {} Hz has no exact match", t.id, t.freq);
                    BandResult::unmatched(t.id.clone(), t.freq, ScoreMode::Simple)
                }
            })
            .collect()
    }

    fn score_enhanced(
        user: &[NormalizedBand],
        target: &[NormalizedBand],
        config: &ScoreConfig,
    ) -> Vec<BandResult> {
        let radius = config.match_radius();
        target
            .iter()
            .map(|t| match nearest_within(user, t.freq, radius) {
                Some(u) => {
                    let delta_db = u.gain_db - t.gain_db;
                    let delta_freq = u.freq - t.freq;
                    let delta_q = u.q - t.q;

                    let db_score = tolerance_score(delta_db, config.tol_db, config.penalty_per_db);
                    let freq_score =
                        tolerance_score(delta_freq, config.tol_freq, config.penalty_per_hz());
                    let q_score = tolerance_score(delta_q, config.tol_q, config.penalty_per_q());

                    let combined = db_score * config.weight_db
                        + freq_score * config.weight_freq
                        + q_score * config.weight_q;
                    let score = to_points(combined);

                    log::trace!(
                        "{} matched {} ({:.0}/{:.0}/{:.0}), score {}",
                        t.id,
                        u.id,
                        db_score,
                        freq_score,
                        q_score,
                        score
                    );

                    BandResult {
                        id: t.id.clone(),
                        freq: t.freq,
                        delta_db,
                        delta_freq: Some(delta_freq),
                        delta_q: Some(delta_q),
                        score,
                        matched_id: Some(u.id.clone()),
                    }
                }
                None => {
                    log::trace!(
                        "{} at {} Hz has no user band within {} Hz",
                        t.id,
                        t.freq,
                        radius
                    );
                    BandResult::unmatched(t.id.clone(), t.freq, ScoreMode::Enhanced)
                }
            })
            .collect()
    }
}

fn expect_array<'a>(value: &'a Value, name: &str) -> EqmResult<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| {
        EqmError::InvalidArgument(format!(
            "{} must be an array of bands, got {}",
            name,
            json_type_name(value)
        ))
    })
}

fn parse_bands(values: &[Value]) -> EqmResult<Vec<Band>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Band::deserialize(value).map_err(|e| EqmError::InvalidBand {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
