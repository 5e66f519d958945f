// File: crates/eicplot-core/src/binning.rs
// Summary: Uniform 1-D partition of a numeric range (bin lookup, centers, edges).

use crate::error::{PlotError, Result};

/// `bins` equal-width bins covering the closed range `[low, high]`.
/// Contract: `bins > 0`, both edges finite, `low < high`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearBinning {
    bins: usize,
    low: f64,
    high: f64,
}

impl LinearBinning {
    /// `axis` only names the dimension in the error message.
    pub fn new(axis: &'static str, bins: usize, low: f64, high: f64) -> Result<Self> {
        if bins == 0 {
            return Err(PlotError::InvalidBinning { axis, reason: "bin count must be positive".into() });
        }
        if !(low.is_finite() && high.is_finite()) {
            return Err(PlotError::InvalidBinning { axis, reason: format!("non-finite edges [{low}, {high}]") });
        }
        if high <= low {
            return Err(PlotError::InvalidBinning { axis, reason: format!("high edge {high} not above low edge {low}") });
        }
        Ok(Self { bins, low, high })
    }

    pub const fn bins(&self) -> usize { self.bins }
    pub const fn low(&self) -> f64 { self.low }
    pub const fn high(&self) -> f64 { self.high }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.high - self.low) / self.bins as f64
    }

    /// Bin owning `v`, or `None` when `v` lies outside `[low, high]` (or is NaN).
    /// The upper edge belongs to the last bin.
    #[inline]
    pub fn index(&self, v: f64) -> Option<usize> {
        if !(v >= self.low && v <= self.high) {
            return None;
        }
        let f = (v - self.low) / (self.high - self.low);
        Some(((f * self.bins as f64) as usize).min(self.bins - 1))
    }

    #[inline]
    pub fn center(&self, i: usize) -> f64 {
        self.low + (i as f64 + 0.5) * self.width()
    }

    /// `bins + 1` evenly spaced edges from `low` to `high`.
    pub fn edges(&self) -> Vec<f64> {
        let step = self.width();
        (0..=self.bins)
            .map(|i| if i == self.bins { self.high } else { self.low + step * i as f64 })
            .collect()
    }
}
