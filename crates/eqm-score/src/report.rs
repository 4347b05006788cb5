//! Report generation for score results

use std::path::Path;

use eqm_core::EqmResult;
use serde::Serialize;

use crate::result::{EqScore, format_delta};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text report
    Text,
    /// JSON report
    Json,
    /// Markdown report
    Markdown,
}

/// One scored attempt
#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    /// Attempt or challenge name
    pub name: String,

    /// Whether the total reached the report threshold
    pub passed: bool,

    pub score: EqScore,
}

/// Report over several scored attempts
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Report title
    pub title: String,

    /// Minimum total counted as a pass
    pub pass_threshold: u8,

    /// Scored attempts
    pub entries: Vec<ScoreEntry>,

    /// Total attempts
    pub total: usize,

    /// Passed attempts
    pub passed: usize,

    /// Failed attempts
    pub failed: usize,
}

impl ScoreReport {
    /// Create a new report
    pub fn new(title: impl Into<String>, pass_threshold: u8) -> Self {
        Self {
            title: title.into(),
            pass_threshold,
            entries: Vec::new(),
            total: 0,
            passed: 0,
            failed: 0,
        }
    }

    /// Add a scored attempt to the report
    pub fn add_score(&mut self, name: impl Into<String>, score: EqScore) {
        let passed = score.passes(self.pass_threshold);
        self.total += 1;
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.entries.push(ScoreEntry {
            name: name.into(),
            passed,
            score,
        });
    }

    /// Check if all attempts passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get pass rate (0.0 - 1.0)
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }

    /// Mean of the attempt totals, 0 when empty
    pub fn average_total(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().map(|e| e.score.total as f64).sum::<f64>() / self.entries.len() as f64
    }

    /// Generate report in specified format
    pub fn generate(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Markdown => self.to_markdown(),
        }
    }

    /// Save report to file
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> EqmResult<()> {
        std::fs::write(path, self.generate(format))?;
        Ok(())
    }

    fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.title));
        output.push_str(&format!("{}\n\n", "=".repeat(self.title.len())));

        output.push_str(&format!(
            "Total: {} | Passed: {} | Failed: {} | Threshold: {}\n",
            self.total, self.passed, self.failed, self.pass_threshold
        ));
        output.push_str(&format!("Pass Rate: {:.1}%\n", self.pass_rate() * 100.0));
        output.push_str(&format!("Average Score: {:.1}\n\n", self.average_total()));

        output.push_str("Results:\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for entry in &self.entries {
            let status = if entry.passed { "PASS" } else { "FAIL" };
            output.push_str(&format!("[{}] {}: {}\n", status, entry.name, entry.score.summary()));

            if !entry.passed {
                for band in entry.score.per_band.iter().filter(|b| b.score < 100) {
                    output.push_str(&format!(
                        "  ✗ {} @ {:.0} Hz: {} (gain {})\n",
                        band.id,
                        band.freq,
                        band.score,
                        format_delta(band.delta_db, "dB")
                    ));
                }
            }
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Summary: {} attempts, {} passed, {} failed\n",
            self.total, self.passed, self.failed
        ));

        output
    }

    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".into())
    }

    fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.title));

        let status_emoji = if self.all_passed() { "✅" } else { "❌" };
        output.push_str(&format!("## Summary {}\n\n", status_emoji));
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Total | {} |\n", self.total));
        output.push_str(&format!("| Passed | {} |\n", self.passed));
        output.push_str(&format!("| Failed | {} |\n", self.failed));
        output.push_str(&format!("| Pass Rate | {:.1}% |\n", self.pass_rate() * 100.0));
        output.push_str(&format!("| Average Score | {:.1} |\n\n", self.average_total()));

        output.push_str("## Results\n\n");

        for entry in &self.entries {
            let status = if entry.passed { "✅ PASS" } else { "❌ FAIL" };
            output.push_str(&format!(
                "### {} - {} ({}/100, {})\n\n",
                status,
                entry.name,
                entry.score.total,
                entry.score.grade()
            ));

            output.push_str("| Band | Freq (Hz) | Score | Δ Gain | Δ Freq | Δ Q |\n");
            output.push_str("|------|-----------|-------|--------|--------|-----|\n");
            for band in &entry.score.per_band {
                output.push_str(&format!(
                    "| {} | {:.0} | {} | {} | {} | {} |\n",
                    band.id,
                    band.freq,
                    band.score,
                    format_delta(band.delta_db, "dB"),
                    band.delta_freq
                        .map(|d| format_delta(d, "Hz"))
                        .unwrap_or_default(),
                    band.delta_q.map(|d| format_delta(d, "")).unwrap_or_default()
                ));
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{BandResult, ScoreMode};
    use approx::assert_relative_eq;

    fn score(total: u8) -> EqScore {
        EqScore {
            total,
            per_band: vec![BandResult {
                id: "target-0".into(),
                freq: 1000.0,
                delta_db: if total == 100 { 0.0 } else { f64::NAN },
                delta_freq: None,
                delta_q: None,
                score: total,
                matched_id: None,
            }],
            mode: ScoreMode::Simple,
        }
    }

    #[test]
    fn test_empty_report() {
        let report = ScoreReport::new("Empty", 70);
        assert!(report.all_passed());
        assert_eq!(report.pass_rate(), 1.0);
        assert_eq!(report.average_total(), 0.0);
    }

    #[test]
    fn test_counts() {
        let mut report = ScoreReport::new("Session", 70);
        report.add_score("bass boost", score(100));
        report.add_score("vocal cut", score(40));
        report.add_score("air", score(70));

        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert_relative_eq!(report.pass_rate(), 2.0 / 3.0);
        assert_relative_eq!(report.average_total(), 70.0);
    }

    #[test]
    fn test_formats() {
        let mut report = ScoreReport::new("Session", 70);
        report.add_score("bass boost", score(100));
        report.add_score("vocal cut", score(0));

        let text = report.generate(ReportFormat::Text);
        assert!(text.contains("[PASS] bass boost"));
        assert!(text.contains("[FAIL] vocal cut"));
        assert!(!text.contains("NaN"));

        let markdown = report.generate(ReportFormat::Markdown);
        assert!(markdown.starts_with("# Session"));
        assert!(markdown.contains("| target-0 | 1000 | 100 |"));

        let json: serde_json::Value =
            serde_json::from_str(&report.generate(ReportFormat::Json)).unwrap();
        assert_eq!(json["passed"], 1);
        assert!(json["entries"][1]["score"]["perBand"][0]["deltaDb"].is_null());
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        let mut report = ScoreReport::new("Saved", 70);
        report.add_score("one", score(100));
        report.save(&path, ReportFormat::Markdown).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("## Results"));
    }
}
