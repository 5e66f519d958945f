// File: crates/eicplot-core/src/heatmap.rs
// Summary: Heat-map views over a GridAccumulator (cell statistic + no-data sentinel).

use crate::grid::GridAccumulator;

/// Regular grid of values addressed by cell index, as consumed by heat-map plotters.
pub trait GridXyz {
    fn dims(&self) -> (usize, usize);
    fn z(&self, i: usize, j: usize) -> f64;
    /// X coordinate of column `i`.
    fn x(&self, i: usize) -> f64;
    /// Y coordinate of row `j`.
    fn y(&self, j: usize) -> f64;

    /// Smallest and largest finite `z`, or `None` if there is none.
    fn z_range(&self) -> Option<(f64, f64)> {
        let (nx, ny) = self.dims();
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for j in 0..ny {
            for i in 0..nx {
                let z = self.z(i, j);
                if z.is_finite() {
                    lo = lo.min(z);
                    hi = hi.max(z);
                }
            }
        }
        if lo.is_finite() { Some((lo, hi)) } else { None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    StdDev,
}

impl Statistic {
    /// No-data value for pull (mean) and resolution (stddev) maps.
    pub const fn default_sentinel(self) -> f64 {
        match self {
            Statistic::Mean => 0.0,
            Statistic::StdDev => 1.0,
        }
    }
}

/// Read-only view picking one statistic per cell; sparse cells show `sentinel`.
#[derive(Clone, Copy, Debug)]
pub struct HeatMap<'a> {
    pub grid: &'a GridAccumulator,
    pub statistic: Statistic,
    pub sentinel: f64,
}

impl<'a> HeatMap<'a> {
    pub fn new(grid: &'a GridAccumulator, statistic: Statistic, sentinel: f64) -> Self {
        Self { grid, statistic, sentinel }
    }

    /// Mean per cell, 0 where unreliable.
    pub fn pull(grid: &'a GridAccumulator) -> Self {
        Self::new(grid, Statistic::Mean, Statistic::Mean.default_sentinel())
    }

    /// Standard deviation per cell, 1 where unreliable.
    pub fn resolution(grid: &'a GridAccumulator) -> Self {
        Self::new(grid, Statistic::StdDev, Statistic::StdDev.default_sentinel())
    }
}

impl GridXyz for HeatMap<'_> {
    fn dims(&self) -> (usize, usize) {
        self.grid.dims()
    }

    fn z(&self, i: usize, j: usize) -> f64 {
        match self.statistic {
            Statistic::Mean => self.grid.mean_or(i, j, self.sentinel),
            Statistic::StdDev => self.grid.stddev_or(i, j, self.sentinel),
        }
    }

    fn x(&self, i: usize) -> f64 {
        self.grid.shape().x.center(i)
    }

    fn y(&self, j: usize) -> f64 {
        self.grid.shape().y.center(j)
    }
}
