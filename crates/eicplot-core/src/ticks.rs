// File: crates/eicplot-core/src/ticks.rs
// Summary: Adaptive major/minor tick generation for linear axes.
// Notes:
// - Output is sorted by value; majors carry a label, minors do not.
// - Candidates are computed as `k * step` and rounded at the step's digit,
//   so a minor that lands on a major compares equal and is dropped.

use crate::error::{PlotError, Result};

/// Target tick count used when the caller asks for zero.
pub const DEFAULT_TICK_TARGET: usize = 4;

/// Labels switch to exponent notation outside `[SCI_LOW, SCI_HIGH)`.
const SCI_LOW: f64 = 1e-4;
const SCI_HIGH: f64 = 1e6;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: Option<String>,
}

impl Tick {
    pub fn major(value: f64) -> Self {
        Self { value, label: Some(format_label(value)) }
    }
    pub fn minor(value: f64) -> Self {
        Self { value, label: None }
    }
    pub fn is_major(&self) -> bool { self.label.is_some() }
}

/// Result of one tick generation, with the step metadata it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLayout {
    pub ticks: Vec<Tick>,
    /// Major step in units of the chosen magnitude, after snapping (never 7 or 9).
    pub multiplier: u32,
    pub major_step: f64,
    pub minor_step: f64,
    /// Significant digits from the top of the major walk down to the step digit.
    pub precision: i32,
}

impl TickLayout {
    pub fn majors(&self) -> impl Iterator<Item = &Tick> + '_ {
        self.ticks.iter().filter(|t| t.is_major())
    }
    pub fn minors(&self) -> impl Iterator<Item = &Tick> + '_ {
        self.ticks.iter().filter(|t| !t.is_major())
    }
}

/// Chooses human-readable tick positions for an arbitrary numeric range.
///
/// Pure: the same `(min, max)` always yields the same ticks, and the generator
/// holds no state besides its target count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickGenerator {
    pub target_count: usize,
}

impl Default for TickGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_TARGET)
    }
}

impl TickGenerator {
    pub const fn new(target_count: usize) -> Self {
        Self { target_count }
    }

    /// Target count with the zero default applied.
    pub const fn effective_target(&self) -> usize {
        if self.target_count == 0 { DEFAULT_TICK_TARGET } else { self.target_count }
    }

    pub fn generate(&self, min: f64, max: f64) -> Result<Vec<Tick>> {
        Ok(self.layout(min, max)?.ticks)
    }

    pub fn layout(&self, min: f64, max: f64) -> Result<TickLayout> {
        if !(min.is_finite() && max.is_finite()) || max <= min {
            return Err(PlotError::InvalidRange { min, max });
        }
        let span = max - min;
        // A target of 1 still gets one interval to divide by.
        let intervals = self.effective_target().saturating_sub(1).max(1) as f64;

        let mut magnitude = 10f64.powi(span.log10().floor() as i32);
        let mut n = span / magnitude;
        while n < intervals {
            magnitude /= 10.0;
            n = span / magnitude;
        }

        let multiplier = snap_multiplier((n / intervals).floor() as u32);
        let major_step = multiplier as f64 * magnitude;
        if !(major_step > 0.0 && major_step.is_finite()) {
            return Err(PlotError::InvalidRange { min, max });
        }
        let decimals = -(major_step.log10().floor() as i32);

        let (major_values, top) = walk(min, max, major_step, decimals);
        if major_values.is_empty() {
            return Err(PlotError::InvalidRange { min, max });
        }
        let precision = top.abs().max(major_step).log10().ceil() as i32 + decimals;

        let minor_step = major_step / minor_divisor(multiplier);
        let (minor_values, _) = walk(min, max, minor_step, decimals + 1);

        let mut ticks: Vec<Tick> = major_values.iter().copied().map(Tick::major).collect();
        ticks.extend(
            minor_values
                .into_iter()
                .filter(|v| !major_values.contains(v))
                .map(Tick::minor),
        );
        ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
        ticks.dedup_by(|a, b| a.value == b.value);

        Ok(TickLayout { ticks, multiplier, major_step, minor_step, precision })
    }
}

/// Human-friendly steps never use 7 or 9.
fn snap_multiplier(raw: u32) -> u32 {
    match raw {
        7 => 6,
        9 => 8,
        m => m,
    }
}

fn minor_divisor(multiplier: u32) -> f64 {
    match multiplier {
        3 | 6 => 3.0,
        5 => 5.0,
        _ => 2.0,
    }
}

/// Walks `k * step` upward from the first multiple at or below `min`.
/// Returns the rounded values inside `[min, max]` and the first value past `max`.
fn walk(min: f64, max: f64, step: f64, decimals: i32) -> (Vec<f64>, f64) {
    let mut k = (min / step).floor();
    let mut kept = Vec::new();
    loop {
        let v = round_to_decimals(k * step, decimals);
        if v > max {
            return (kept, v);
        }
        if v >= min {
            kept.push(v);
        }
        let next = k + 1.0;
        // Range narrower than float resolution at this offset.
        if next == k {
            return (kept, v);
        }
        k = next;
    }
}

/// Round half away from zero to `decimals` places (negative means tens,
/// hundreds, ...). Never returns negative zero.
pub fn round_to_decimals(x: f64, decimals: i32) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let r = if decimals >= 0 {
        if x.fract() == 0.0 {
            return x;
        }
        let pow = 10f64.powi(decimals);
        let scaled = x * pow;
        if !scaled.is_finite() {
            return x;
        }
        scaled.round() / pow
    } else {
        let pow = 10f64.powi(-decimals);
        if !pow.is_finite() {
            return 0.0;
        }
        (x / pow).round() * pow
    };
    if r == 0.0 { 0.0 } else { r }
}

/// Shortest round-trip decimal text, in exponent form for very small or large values.
pub fn format_label(value: f64) -> String {
    let a = value.abs();
    if a != 0.0 && (a < SCI_LOW || a >= SCI_HIGH) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapping_skips_seven_and_nine() {
        let snapped: Vec<u32> = (1..=9).map(snap_multiplier).collect();
        assert_eq!(snapped, vec![1, 2, 3, 4, 5, 6, 6, 8, 8]);
    }

    #[test]
    fn divisor_by_multiplier() {
        assert_eq!(minor_divisor(1), 2.0);
        assert_eq!(minor_divisor(3), 3.0);
        assert_eq!(minor_divisor(5), 5.0);
        assert_eq!(minor_divisor(6), 3.0);
        assert_eq!(minor_divisor(8), 2.0);
    }

    #[test]
    fn rounding_cleans_float_noise() {
        assert_eq!(round_to_decimals(0.1 + 0.2, 1), 0.3);
        assert_eq!(round_to_decimals(2.9999999999, 2), 3.0);
        assert_eq!(round_to_decimals(-0.30000000000000004, 2), -0.3);
        assert_eq!(round_to_decimals(1234.0, -2), 1200.0);
        assert_eq!(round_to_decimals(42.0, 3), 42.0);
    }

    #[test]
    fn rounding_never_yields_negative_zero() {
        let z = round_to_decimals(-1e-12, 3);
        assert_eq!(z, 0.0);
        assert!(z.is_sign_positive());
        assert!(round_to_decimals(-0.0, 0).is_sign_positive());
        assert!(round_to_decimals(-4.0, -1).is_sign_positive());
    }

    #[test]
    fn labels() {
        assert_eq!(format_label(20.0), "20");
        assert_eq!(format_label(0.0), "0");
        assert_eq!(format_label(-0.5), "-0.5");
        assert_eq!(format_label(0.0012), "0.0012");
        assert_eq!(format_label(2e6), "2e6");
        assert_eq!(format_label(5e-5), "5e-5");
    }
}
