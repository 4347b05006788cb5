//! # eqm-curve
//!
//! Approximate frequency-response curves for a set of EQ bands.
//!
//! ## Features
//!
//! - **Curve Evaluation**: log-spaced sampling of the summed band response
//! - **Per-Type Response**: peak, notch, pass and shelf shapes
//! - **Curve Comparison**: average, maximum and relative difference between two curves
//!
//! The response model is a display heuristic. Output is clamped to
//! +/- 12 dB for drawing and is never used for scoring.
//!
//! ## Example
//!
//! ```rust
//! use eqm_core::Band;
//! use eqm_curve::curve;
//!
//! let points = curve(&[Band::new(1000.0, 6.0)]);
//! assert_eq!(points.len(), 100);
//! ```

pub mod compare;
pub mod config;
pub mod curve;
pub mod response;

pub use compare::{CurveComparison, compare_band_sets, compare_curves};
pub use config::CurveConfig;
pub use curve::{CurvePoint, curve, curve_with, response_at};
