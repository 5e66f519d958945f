// File: crates/eicplot-core/src/axis.rs
// Summary: Axis model with label, range, and tick density.

use crate::binning::LinearBinning;
use crate::error::Result;
use crate::ticks::{Tick, TickGenerator};

/// Suggested tick count for plot axes.
pub const DEFAULT_AXIS_TICKS: usize = 5;
/// Color bars are short; they get fewer ticks.
pub const COLOR_BAR_TICKS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub tick_target: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, tick_target: DEFAULT_AXIS_TICKS }
    }

    /// Axis spanning a binning's full range.
    pub fn from_binning(label: impl Into<String>, binning: &LinearBinning) -> Self {
        Self::new(label, binning.low(), binning.high())
    }

    pub fn color_bar(min: f64, max: f64) -> Self {
        Self::new("", min, max).with_tick_target(COLOR_BAR_TICKS)
    }

    pub fn with_tick_target(mut self, n: usize) -> Self {
        self.tick_target = n;
        self
    }

    pub fn ticks(&self) -> Result<Vec<Tick>> {
        TickGenerator::new(self.tick_target).generate(self.min, self.max)
    }
}
