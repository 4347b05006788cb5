//! Score results

use serde::Serialize;

/// Scoring strategy, picked from the shape of the target data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    /// Frequency + gain targets, exact frequency match
    Simple,
    /// Targets carrying id/q/type, nearest-frequency match
    Enhanced,
}

/// Outcome of scoring one target band
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandResult {
    /// Target band id (positional fallback if the target had none)
    pub id: String,

    /// Target band frequency (Hz)
    pub freq: f64,

    /// User gain minus target gain; NaN when unmatched
    pub delta_db: f64,

    /// User frequency minus target frequency (enhanced mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_freq: Option<f64>,

    /// User Q minus target Q (enhanced mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_q: Option<f64>,

    /// 0-100
    pub score: u8,

    /// Id of the user band this target was matched to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_id: Option<String>,
}

impl BandResult {
    /// Result for a target band with no usable user band
    pub(crate) fn unmatched(id: String, freq: f64, mode: ScoreMode) -> Self {
        let extended = match mode {
            ScoreMode::Simple => None,
            ScoreMode::Enhanced => Some(f64::NAN),
        };
        Self {
            id,
            freq,
            delta_db: f64::NAN,
            delta_freq: extended,
            delta_q: extended,
            score: 0,
            matched_id: None,
        }
    }

    /// Whether a user band was found for this target
    pub fn matched(&self) -> bool {
        !self.delta_db.is_nan()
    }
}

/// Aggregate score for one attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EqScore {
    /// 0-100, rounded mean of the per-band scores
    pub total: u8,

    /// One entry per target band, in target order
    pub per_band: Vec<BandResult>,

    /// Strategy that produced this score
    pub mode: ScoreMode,
}

impl EqScore {
    /// Score for an empty target set
    pub(crate) fn empty(mode: ScoreMode) -> Self {
        Self {
            total: 0,
            per_band: Vec::new(),
            mode,
        }
    }

    /// Letter grade for the total
    pub fn grade(&self) -> char {
        match self.total {
            90..=100 => 'A',
            80..=89 => 'B',
            70..=79 => 'C',
            60..=69 => 'D',
            _ => 'F',
        }
    }

    /// Whether the total reaches `threshold`
    pub fn passes(&self, threshold: u8) -> bool {
        self.total >= threshold
    }

    /// Number of target bands that found a user band
    pub fn matched_count(&self) -> usize {
        self.per_band.iter().filter(|b| b.matched()).count()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Score: {}/100 ({}), {:?} mode, {}/{} bands matched",
            self.total,
            self.grade(),
            self.mode,
            self.matched_count(),
            self.per_band.len()
        )
    }

    /// Get detailed report
    pub fn detailed_report(&self) -> String {
        let mut report = String::new();

        report.push_str("EQ Match Score\n");
        report.push_str("==============\n\n");
        report.push_str(&format!("{}\n\n", self.summary()));

        report.push_str("Bands:\n");
        for band in &self.per_band {
            report.push_str(&format!(
                "  {:<12} {:>8.1} Hz  {:>3}  gain {}",
                band.id,
                band.freq,
                band.score,
                format_delta(band.delta_db, "dB")
            ));
            if let Some(delta_freq) = band.delta_freq {
                report.push_str(&format!("  freq {}", format_delta(delta_freq, "Hz")));
            }
            if let Some(delta_q) = band.delta_q {
                report.push_str(&format!("  q {}", format_delta(delta_q, "")));
            }
            if let Some(matched) = &band.matched_id {
                report.push_str(&format!("  <- {}", matched));
            }
            report.push('\n');
        }

        report
    }
}

/// Signed delta for display, em dash when unmatched
pub fn format_delta(delta: f64, unit: &str) -> String {
    if delta.is_nan() {
        "—".into()
    } else if unit.is_empty() {
        format!("{:+.2}", delta)
    } else {
        format!("{:+.1} {}", delta, unit)
    }
}
