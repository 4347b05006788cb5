//! Configuration for EQ scoring

use std::path::Path;

use eqm_core::{EqmError, EqmResult};
use serde::{Deserialize, Serialize};

/// Allowed slack when checking that the component weights sum to 1
const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Configuration for EQ scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Gain error that still scores full marks (dB)
    pub tol_db: f64,

    /// Frequency error that still scores full marks (Hz)
    pub tol_freq: f64,

    /// Q error that still scores full marks
    pub tol_q: f64,

    /// Points lost per dB beyond tolerance
    pub penalty_per_db: f64,

    /// Weight of the gain component (enhanced mode)
    pub weight_db: f64,

    /// Weight of the frequency component (enhanced mode)
    pub weight_freq: f64,

    /// Weight of the Q component (enhanced mode)
    pub weight_q: f64,

    /// Match radius as a multiple of `tol_freq`
    pub match_radius_factor: f64,

    /// Minimum total that counts as a pass
    pub pass_threshold: u8,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            tol_db: 3.0,
            tol_freq: 50.0,
            tol_q: 0.5,
            penalty_per_db: 10.0,
            weight_db: 0.5,
            weight_freq: 0.3,
            weight_q: 0.2,
            match_radius_factor: 3.0,
            pass_threshold: 70,
        }
    }
}

impl ScoreConfig {
    /// Loose tolerances for first challenges
    pub fn beginner() -> Self {
        Self {
            tol_db: 6.0,
            tol_freq: 100.0,
            tol_q: 1.0,
            pass_threshold: 60,
            ..Default::default()
        }
    }

    /// Same as default
    pub fn standard() -> Self {
        Self::default()
    }

    /// Tight tolerances for trained ears
    pub fn expert() -> Self {
        Self {
            tol_db: 1.5,
            tol_freq: 25.0,
            tol_q: 0.25,
            pass_threshold: 80,
            ..Default::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::beginner()),
            "standard" | "default" => Some(Self::standard()),
            "expert" => Some(Self::expert()),
            _ => None,
        }
    }

    /// Builder pattern: set gain tolerance
    pub fn with_tol_db(mut self, tol_db: f64) -> Self {
        self.tol_db = tol_db;
        self
    }

    /// Builder pattern: set frequency tolerance
    pub fn with_tol_freq(mut self, tol_freq: f64) -> Self {
        self.tol_freq = tol_freq;
        self
    }

    /// Builder pattern: set Q tolerance
    pub fn with_tol_q(mut self, tol_q: f64) -> Self {
        self.tol_q = tol_q;
        self
    }

    /// Builder pattern: set pass threshold
    pub fn with_pass_threshold(mut self, threshold: u8) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Points lost per Hz beyond tolerance
    pub fn penalty_per_hz(&self) -> f64 {
        self.penalty_per_db / 10.0
    }

    /// Points lost per unit of Q beyond tolerance
    pub fn penalty_per_q(&self) -> f64 {
        self.penalty_per_db * 10.0
    }

    /// Largest frequency distance at which a user band can still be matched (Hz)
    pub fn match_radius(&self) -> f64 {
        self.tol_freq * self.match_radius_factor
    }

    /// Check values for consistency
    pub fn validate(&self) -> EqmResult<()> {
        let tolerances = [
            ("tol_db", self.tol_db),
            ("tol_freq", self.tol_freq),
            ("tol_q", self.tol_q),
            ("penalty_per_db", self.penalty_per_db),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(EqmError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.match_radius_factor.is_finite() || self.match_radius_factor <= 0.0 {
            return Err(EqmError::Config(format!(
                "match_radius_factor must be positive, got {}",
                self.match_radius_factor
            )));
        }

        let weight_sum = self.weight_db + self.weight_freq + self.weight_q;
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EqmError::Config(format!(
                "component weights must sum to 1, got {}",
                weight_sum
            )));
        }

        if self.pass_threshold > 100 {
            return Err(EqmError::Config(format!(
                "pass_threshold must be at most 100, got {}",
                self.pass_threshold
            )));
        }

        Ok(())
    }

    /// Load from a JSON or YAML file, chosen by extension
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EqmResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let config: Self = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| EqmError::Serialization(e.to_string()))?,
            Some("yaml") | Some("yml") => serde_yml::from_str(&content)
                .map_err(|e| EqmError::Serialization(e.to_string()))?,
            _ => {
                return Err(EqmError::Config(format!(
                    "unsupported config format: {}",
                    path.display()
                )));
            }
        };

        config.validate()?;
        log::debug!("loaded score config from {}", path.display());
        Ok(config)
    }
}
