// File: crates/eicplot/src/report.rs
// Summary: CSV rows for tick layouts and per-cell grid statistics.

use anyhow::Result;
use eicplot_core::{GridXyz, HeatMap, Tick};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize, PartialEq)]
pub struct TickRow<'a> {
    pub value: f64,
    pub label: &'a str,
    pub kind: &'static str,
}

impl<'a> From<&'a Tick> for TickRow<'a> {
    fn from(t: &'a Tick) -> Self {
        Self {
            value: t.value,
            label: t.label.as_deref().unwrap_or(""),
            kind: if t.is_major() { "major" } else { "minor" },
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CellRow {
    pub i: usize,
    pub j: usize,
    pub x: f64,
    pub y: f64,
    pub count: u64,
    pub value: f64,
}

/// One row per cell, x index varying fastest.
pub fn cell_rows(map: &HeatMap<'_>) -> Vec<CellRow> {
    map.grid
        .cells()
        .map(|((i, j), c)| CellRow { i, j, x: map.x(i), y: map.y(j), count: c.count, value: map.z(i, j) })
        .collect()
}

/// Stdout when `path` is `None`; parent directories are created as needed.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent() {
                std::fs::create_dir_all(parent)?;
            }
            Ok(Box::new(std::fs::File::create(p)?))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

pub fn write_rows<W: Write, T: Serialize>(out: W, rows: impl IntoIterator<Item = T>) -> Result<()> {
    let mut w = csv::Writer::from_writer(out);
    for row in rows {
        w.serialize(row)?;
    }
    w.flush()?;
    Ok(())
}
