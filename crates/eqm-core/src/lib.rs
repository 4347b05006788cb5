//! eqm-core: Shared types for EQ Match
//!
//! Band model, band defaulting, and the error type used across all
//! EQ Match crates.

mod band;
mod error;

pub use band::*;
pub use error::*;

/// Lowest audible frequency (Hz)
pub const MIN_FREQUENCY: f64 = 20.0;
/// Highest audible frequency (Hz)
pub const MAX_FREQUENCY: f64 = 20000.0;
pub const MIN_Q: f64 = 0.1;
pub const MAX_Q: f64 = 10.0;
/// Q applied when a band carries none
pub const DEFAULT_Q: f64 = 1.0;
/// Gain range offered by the editor (dB)
pub const MIN_GAIN_DB: f64 = -12.0;
pub const MAX_GAIN_DB: f64 = 12.0;
