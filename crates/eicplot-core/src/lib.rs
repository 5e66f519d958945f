// File: crates/eicplot-core/src/lib.rs
// Summary: Core library entry point; exports axis tick generation and binned grid statistics.

pub mod axis;
pub mod binning;
pub mod error;
pub mod grid;
pub mod heatmap;
pub mod ticks;

pub use axis::Axis;
pub use binning::LinearBinning;
pub use error::{PlotError, Result};
pub use grid::{CellMoments, GridAccumulator, GridShape, Sample, DEFAULT_MIN_SAMPLES};
pub use heatmap::{GridXyz, HeatMap, Statistic};
pub use ticks::{Tick, TickGenerator, TickLayout, DEFAULT_TICK_TARGET};
