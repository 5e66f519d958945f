// File: crates/eicplot-core/src/error.rs
// Summary: Error type shared by tick generation and grid construction.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// Tick generation needs `min < max`, both finite.
    #[error("illegal axis range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid {axis} binning: {reason}")]
    InvalidBinning { axis: &'static str, reason: String },

    #[error("grid shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch { left: (usize, usize), right: (usize, usize) },
}

pub type Result<T> = std::result::Result<T, PlotError>;
