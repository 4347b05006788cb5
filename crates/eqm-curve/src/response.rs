//! Per-type band response
//!
//! These are display heuristics, not biquad transfer functions. Each one
//! returns the fraction of the band's gain that applies at a frequency; the
//! shapes are pinned by golden tests and must stay as they are.

use eqm_core::{FilterType, NormalizedBand};

/// Lower bound applied to Q by the bell shapes
const MIN_BELL_Q: f64 = 0.1;

/// Fraction of `band.gain_db` applied at `freq`
pub fn fraction(band: &NormalizedBand, freq: f64) -> f64 {
    match band.filter_type {
        FilterType::Peak => bell(band, freq),
        FilterType::Notch => -bell(band, freq),
        FilterType::HighPass => {
            if freq >= band.freq {
                1.0
            } else {
                (freq / band.freq).powf(2.0 * band.q)
            }
        }
        FilterType::LowPass => {
            if freq <= band.freq {
                1.0
            } else {
                (band.freq / freq).powf(2.0 * band.q)
            }
        }
        FilterType::HighShelf => {
            if freq >= band.freq {
                1.0
            } else {
                0.5 + 0.5 * ((freq - band.freq) / (band.freq / band.q)).tanh()
            }
        }
        FilterType::LowShelf => {
            if freq <= band.freq {
                1.0
            } else {
                0.5 + 0.5 * ((band.freq - freq) / (band.freq / band.q)).tanh()
            }
        }
    }
}

/// Gain contribution (dB) of one band at `freq`
#[inline]
pub fn contribution(band: &NormalizedBand, freq: f64) -> f64 {
    band.gain_db * fraction(band, freq)
}

// Symmetric bell in log-frequency, narrower as Q rises
fn bell(band: &NormalizedBand, freq: f64) -> f64 {
    let x = (freq / band.freq).ln() * band.q.max(MIN_BELL_Q) * 2.0;
    1.0 / (1.0 + x * x)
}
