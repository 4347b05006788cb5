//! Configuration for curve sampling

use eqm_core::{MAX_FREQUENCY, MAX_GAIN_DB, MIN_FREQUENCY};
use serde::{Deserialize, Serialize};

/// Configuration for curve evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Number of log-spaced sample points
    pub num_points: usize,

    /// Lowest sampled frequency (Hz)
    pub min_freq_hz: f64,

    /// Highest sampled frequency (Hz)
    pub max_freq_hz: f64,

    /// Summed gain is clamped to +/- this value (dB)
    pub clamp_db: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            num_points: 100,
            min_freq_hz: MIN_FREQUENCY,
            max_freq_hz: MAX_FREQUENCY,
            clamp_db: MAX_GAIN_DB,
        }
    }
}

impl CurveConfig {
    /// Builder pattern: set number of points
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Builder pattern: set frequency range
    pub fn with_freq_range(mut self, min: f64, max: f64) -> Self {
        self.min_freq_hz = min;
        self.max_freq_hz = max;
        self
    }

    /// Builder pattern: set display clamp
    pub fn with_clamp_db(mut self, clamp_db: f64) -> Self {
        self.clamp_db = clamp_db;
        self
    }

    /// Log-spaced sample frequencies, both ends inclusive
    pub fn frequencies(&self) -> Vec<f64> {
        match self.num_points {
            0 => Vec::new(),
            1 => vec![self.min_freq_hz],
            n => {
                let ratio = self.max_freq_hz / self.min_freq_hz;
                (0..n)
                    .map(|i| {
                        let t = i as f64 / (n - 1) as f64;
                        self.min_freq_hz * ratio.powf(t)
                    })
                    .collect()
            }
        }
    }
}
