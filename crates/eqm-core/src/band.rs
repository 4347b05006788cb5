//! Equalizer band model
//!
//! A [`Band`] is what callers hand in: frequency and gain are mandatory, the
//! rest is optional. Both algorithms start by turning every band into a
//! [`NormalizedBand`], which has all defaults applied.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_Q, MAX_FREQUENCY, MAX_GAIN_DB, MAX_Q, MIN_FREQUENCY, MIN_GAIN_DB, MIN_Q};

/// Filter type of an EQ band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Peak,
    HighPass,
    LowPass,
    HighShelf,
    LowShelf,
    Notch,
}

impl FilterType {
    pub const ALL: [Self; 6] = [
        Self::Peak,
        Self::HighPass,
        Self::LowPass,
        Self::HighShelf,
        Self::LowShelf,
        Self::Notch,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            FilterType::Peak => "Peak",
            FilterType::HighPass => "High Pass",
            FilterType::LowPass => "Low Pass",
            FilterType::HighShelf => "High Shelf",
            FilterType::LowShelf => "Low Shelf",
            FilterType::Notch => "Notch",
        }
    }
}

/// One equalizer adjustment as supplied by a caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Band {
    /// Opaque identifier for UI correlation (never used for matching)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Center/corner frequency in Hz
    pub freq: f64,

    /// Gain in dB at `freq`
    #[serde(rename = "gainDb")]
    pub gain_db: f64,

    /// Resonance, 1.0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<f64>,

    /// Filter type, peak when absent
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<FilterType>,
}

impl Band {
    /// Frequency + gain only band
    pub fn new(freq: f64, gain_db: f64) -> Self {
        Self {
            freq,
            gain_db,
            ..Default::default()
        }
    }

    /// Builder pattern: set id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder pattern: set Q
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = Some(q);
        self
    }

    /// Builder pattern: set filter type
    pub fn with_type(mut self, filter_type: FilterType) -> Self {
        self.filter_type = Some(filter_type);
        self
    }

    /// True if any of `id`, `q` or `type` is present
    pub fn has_extended_fields(&self) -> bool {
        self.id.is_some() || self.q.is_some() || self.filter_type.is_some()
    }

    /// Copy limited to the editor ranges
    ///
    /// `freq` goes to the audible range, `gain_db` to the editor's gain range
    /// and `q` (if set) to the valid range.
    pub fn clamped(&self) -> Self {
        let freq = self.freq.clamp(MIN_FREQUENCY, MAX_FREQUENCY);
        let gain_db = self.gain_db.clamp(MIN_GAIN_DB, MAX_GAIN_DB);
        let q = self.q.map(|q| q.clamp(MIN_Q, MAX_Q));
        if freq != self.freq || gain_db != self.gain_db || q != self.q {
            log::trace!(
                "clamped band {:?}: freq {} -> {}, gain {} -> {}",
                self.id,
                self.freq,
                freq,
                self.gain_db,
                gain_db
            );
        }
        Self {
            freq,
            gain_db,
            q,
            ..self.clone()
        }
    }
}

/// A band with all defaults applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBand {
    pub id: String,
    pub freq: f64,
    #[serde(rename = "gainDb")]
    pub gain_db: f64,
    pub q: f64,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
}

/// Apply band defaults: `q` = 1.0, `type` = peak, `id` = `"<prefix>-<index>"`
pub fn normalize(band: &Band, prefix: &str, index: usize) -> NormalizedBand {
    NormalizedBand {
        id: band
            .id
            .clone()
            .unwrap_or_else(|| format!("{}-{}", prefix, index)),
        freq: band.freq,
        gain_db: band.gain_db,
        q: band.q.unwrap_or(DEFAULT_Q),
        filter_type: band.filter_type.unwrap_or_default(),
    }
}

/// Normalize a band list positionally
pub fn normalize_all(bands: &[Band], prefix: &str) -> Vec<NormalizedBand> {
    bands
        .iter()
        .enumerate()
        .map(|(i, b)| normalize(b, prefix, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults() {
        let n = normalize(&Band::new(1000.0, 3.0), "user", 2);
        assert_eq!(n.id, "user-2");
        assert_eq!(n.q, 1.0);
        assert_eq!(n.filter_type, FilterType::Peak);
        assert_eq!(n.freq, 1000.0);
        assert_eq!(n.gain_db, 3.0);
    }

    #[test]
    fn test_normalize_keeps_explicit_fields() {
        let band = Band::new(250.0, -4.0)
            .with_id("low")
            .with_q(2.5)
            .with_type(FilterType::LowShelf);
        let n = normalize(&band, "target", 0);
        assert_eq!(n.id, "low");
        assert_eq!(n.q, 2.5);
        assert_eq!(n.filter_type, FilterType::LowShelf);
    }

    #[test]
    fn test_unset_equals_explicit_default() {
        let implicit = normalize(&Band::new(500.0, 1.0), "t", 0);
        let explicit = normalize(
            &Band::new(500.0, 1.0).with_q(1.0).with_type(FilterType::Peak),
            "t",
            0,
        );
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_extended_fields() {
        assert!(!Band::new(100.0, 0.0).has_extended_fields());
        assert!(Band::new(100.0, 0.0).with_id("a").has_extended_fields());
        assert!(Band::new(100.0, 0.0).with_q(0.7).has_extended_fields());
        assert!(Band::new(100.0, 0.0)
            .with_type(FilterType::Notch)
            .has_extended_fields());
    }

    #[test]
    fn test_clamped() {
        let band = Band::new(5.0, 2.0).with_q(40.0).clamped();
        assert_eq!(band.freq, MIN_FREQUENCY);
        assert_eq!(band.q, Some(MAX_Q));

        let band = Band::new(30000.0, 2.0).clamped();
        assert_eq!(band.freq, MAX_FREQUENCY);
        assert_eq!(band.gain_db, 2.0);
        assert_eq!(band.q, None);

        assert_eq!(Band::new(1000.0, -30.0).clamped().gain_db, MIN_GAIN_DB);
        assert_eq!(Band::new(1000.0, 18.5).clamped().gain_db, MAX_GAIN_DB);
    }

    #[test]
    fn test_filter_type_names() {
        assert_eq!(FilterType::HighShelf.name(), "High Shelf");
        let names: Vec<&str> = FilterType::ALL.iter().map(FilterType::name).collect();
        assert_eq!(names.len(), 6);
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn test_json_field_names() {
        let band: Band =
            serde_json::from_str(r#"{"freq": 100, "gainDb": 2.5, "type": "highshelf"}"#)
                .unwrap();
        assert_eq!(band.filter_type, Some(FilterType::HighShelf));
        assert_eq!(band.q, None);
        assert_eq!(band.gain_db, 2.5);

        let json = serde_json::to_string(&Band::new(100.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"freq":100.0,"gainDb":2.0}"#);
    }
}
