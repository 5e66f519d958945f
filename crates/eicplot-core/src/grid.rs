// File: crates/eicplot-core/src/grid.rs
// Summary: 2-D binned streaming statistics (count, sum, sum of squares per cell).
// Notes:
// - Cells keep raw moments only; mean and stddev are derived on read.
// - Moments add elementwise, so shards filled on separate threads merge exactly
//   like one sequential pass (see `GridAccumulator::from_samples_par`).

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::binning::LinearBinning;
use crate::error::{PlotError, Result};

/// Cells with fewer samples report no statistic.
pub const DEFAULT_MIN_SAMPLES: u64 = 3;

/// One `(x, y, value)` observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }
}

/// Running aggregates of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellMoments {
    pub count: u64,
    pub sum: f64,
    pub sum_squares: f64,
}

impl CellMoments {
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_squares += value * value;
    }

    pub fn merge(&mut self, other: &CellMoments) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_squares += other.sum_squares;
    }

    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 { return None; }
        Some(self.sum / self.count as f64)
    }

    /// Population variance, clamped at zero against round-off.
    pub fn variance(&self) -> Option<f64> {
        let mean = self.mean()?;
        let mean2 = self.sum_squares / self.count as f64;
        Some((mean2 - mean * mean).max(0.0))
    }

    pub fn stddev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }
}

/// Binning of both grid axes, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridShape {
    pub x: LinearBinning,
    pub y: LinearBinning,
}

impl GridShape {
    pub fn new(
        n_bins_x: usize,
        x_low: f64,
        x_high: f64,
        n_bins_y: usize,
        y_low: f64,
        y_high: f64,
    ) -> Result<Self> {
        Ok(Self {
            x: LinearBinning::new("x", n_bins_x, x_low, x_high)?,
            y: LinearBinning::new("y", n_bins_y, y_low, y_high)?,
        })
    }

    pub const fn dims(&self) -> (usize, usize) {
        (self.x.bins(), self.y.bins())
    }

    #[inline]
    pub fn locate(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        Some((self.x.index(x)?, self.y.index(y)?))
    }

    pub fn cell_center(&self, i: usize, j: usize) -> (f64, f64) {
        (self.x.center(i), self.y.center(j))
    }
}

/// Fixed-size grid of [`CellMoments`], filled through [`GridAccumulator::accumulate`].
///
/// Not synchronized: parallel fills give each worker its own accumulator and
/// combine them with [`GridAccumulator::merge`].
#[derive(Clone, Debug, PartialEq)]
pub struct GridAccumulator {
    shape: GridShape,
    cells: Vec<CellMoments>,
    min_samples: u64,
}

impl GridAccumulator {
    pub fn new(shape: GridShape) -> Self {
        let (nx, ny) = shape.dims();
        Self { shape, cells: vec![CellMoments::default(); nx * ny], min_samples: DEFAULT_MIN_SAMPLES }
    }

    pub fn with_min_samples(mut self, min_samples: u64) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Fill from a slice on the rayon pool: one accumulator per split, merged at the end.
    pub fn from_samples_par(shape: GridShape, samples: &[Sample]) -> Self {
        let grid = samples
            .par_iter()
            .fold(
                || Self::new(shape),
                |mut g, s| {
                    g.accumulate(s.x, s.y, s.value);
                    g
                },
            )
            .reduce(
                || Self::new(shape),
                |mut a, b| {
                    a.add_cells(&b);
                    a
                },
            );
        tracing::debug!(samples = samples.len(), binned = grid.total_count(), "parallel grid fill");
        grid
    }

    pub const fn shape(&self) -> &GridShape { &self.shape }
    pub const fn dims(&self) -> (usize, usize) { self.shape.dims() }
    pub const fn min_samples(&self) -> u64 { self.min_samples }

    /// Add one sample to its cell; samples outside the grid are dropped.
    #[inline]
    pub fn accumulate(&mut self, x: f64, y: f64, value: f64) {
        if let Some((i, j)) = self.shape.locate(x, y) {
            let k = self.offset(i, j);
            self.cells[k].push(value);
        }
    }

    /// Add another grid's moments cell by cell. Shapes must match exactly.
    pub fn merge(&mut self, other: &GridAccumulator) -> Result<()> {
        if self.shape != other.shape {
            return Err(PlotError::ShapeMismatch { left: self.dims(), right: other.dims() });
        }
        self.add_cells(other);
        Ok(())
    }

    fn add_cells(&mut self, other: &GridAccumulator) {
        for (a, b) in self.cells.iter_mut().zip(&other.cells) {
            a.merge(b);
        }
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        j * self.shape.x.bins() + i
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&CellMoments> {
        let (nx, ny) = self.dims();
        if i >= nx || j >= ny { return None; }
        self.cells.get(self.offset(i, j))
    }

    pub fn count(&self, i: usize, j: usize) -> u64 {
        self.cell(i, j).map_or(0, |c| c.count)
    }

    pub fn total_count(&self) -> u64 {
        self.cells.iter().map(|c| c.count).sum()
    }

    /// Cell moments when the cell holds at least `min_samples` samples.
    fn reliable(&self, i: usize, j: usize) -> Option<&CellMoments> {
        self.cell(i, j).filter(|c| c.count >= self.min_samples)
    }

    /// Mean of the cell, or `None` for too few samples or an index outside the grid.
    pub fn mean(&self, i: usize, j: usize) -> Option<f64> {
        self.reliable(i, j)?.mean()
    }

    pub fn stddev(&self, i: usize, j: usize) -> Option<f64> {
        self.reliable(i, j)?.stddev()
    }

    pub fn mean_or(&self, i: usize, j: usize, sentinel: f64) -> f64 {
        self.mean(i, j).unwrap_or(sentinel)
    }

    pub fn stddev_or(&self, i: usize, j: usize, sentinel: f64) -> f64 {
        self.stddev(i, j).unwrap_or(sentinel)
    }

    pub fn cell_center(&self, i: usize, j: usize) -> (f64, f64) {
        self.shape.cell_center(i, j)
    }

    /// All cells as `((i, j), moments)`, x index varying fastest.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &CellMoments)> + '_ {
        let nx = self.shape.x.bins();
        self.cells.iter().enumerate().map(move |(k, c)| ((k % nx, k / nx), c))
    }
}

impl Extend<Sample> for GridAccumulator {
    fn extend<T: IntoIterator<Item = Sample>>(&mut self, iter: T) {
        for s in iter {
            self.accumulate(s.x, s.y, s.value);
        }
    }
}
