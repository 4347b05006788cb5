//! # eqm-score
//!
//! Scores how closely a user's EQ bands match a target set.
//!
//! ## Features
//!
//! - **Mode Detection**: frequency+gain targets use exact matching, targets
//!   carrying id/q/type use nearest-frequency matching
//! - **Tolerance Scoring**: full marks inside a window, linear decay outside
//! - **Presets**: beginner, standard and expert tolerances
//! - **Report Generation**: text, JSON and Markdown reports
//!
//! ## Example
//!
//! ```rust
//! use eqm_core::Band;
//! use eqm_score::score;
//!
//! let target = vec![Band::new(100.0, 2.0), Band::new(1000.0, -3.0)];
//! let user = vec![Band::new(100.0, 4.0), Band::new(1000.0, -3.0)];
//!
//! let result = score(&user, &target);
//! assert_eq!(result.total, 100);
//! ```

pub mod config;
pub mod matching;
pub mod report;
pub mod result;
pub mod scorer;
pub mod tolerance;

pub use config::ScoreConfig;
pub use matching::detect_mode;
pub use report::{ReportFormat, ScoreEntry, ScoreReport};
pub use result::{BandResult, EqScore, ScoreMode};
pub use scorer::EqScorer;
pub use tolerance::tolerance_score;

use eqm_core::{Band, EqmResult};
use serde_json::Value;

/// Score with default tolerances (3 dB, 50 Hz, 0.5 Q)
pub fn score(user: &[Band], target: &[Band]) -> EqScore {
    EqScorer::score(user, target, &ScoreConfig::default())
}

/// Score with explicit tolerances and default penalties
pub fn score_with_tolerances(
    user: &[Band],
    target: &[Band],
    tol_db: f64,
    tol_freq: f64,
    tol_q: f64,
) -> EqScore {
    let config = ScoreConfig::default()
        .with_tol_db(tol_db)
        .with_tol_freq(tol_freq)
        .with_tol_q(tol_q);
    EqScorer::score(user, target, &config)
}

/// Score untyped JSON input with default tolerances
pub fn score_values(user: &Value, target: &Value) -> EqmResult<EqScore> {
    EqScorer::score_values(user, target, &ScoreConfig::default())
}
