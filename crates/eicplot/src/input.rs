// File: crates/eicplot/src/input.rs
// Summary: Load (x, y, value) samples from CSV, accepting common column aliases.

use anyhow::{bail, Context, Result};
use csv::StringRecord;
use eicplot_core::Sample;
use std::io::Read;
use std::path::Path;

const X_NAMES: &[&str] = &["x", "eta"];
const Y_NAMES: &[&str] = &["y", "pt", "p_t"];
const VALUE_NAMES: &[&str] = &["value", "z", "v", "pull", "residual"];

pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_samples(rdr)
}

/// Rows that fail to parse are skipped and counted; missing columns are an error.
pub fn read_samples<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Sample>> {
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "input columns");

    let canonical: StringRecord = headers
        .iter()
        .map(|h| {
            if X_NAMES.contains(&h.as_str()) {
                "x"
            } else if Y_NAMES.contains(&h.as_str()) {
                "y"
            } else if VALUE_NAMES.contains(&h.as_str()) {
                "value"
            } else {
                h.as_str()
            }
        })
        .collect();
    for want in ["x", "y", "value"] {
        if !canonical.iter().any(|h| h == want) {
            bail!("no '{want}' column in headers {headers:?}");
        }
    }
    rdr.set_headers(canonical);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.deserialize::<Sample>() {
        match rec {
            Ok(s) => out.push(s),
            Err(e) => {
                skipped += 1;
                tracing::trace!(error = %e, "skipping row");
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "rows could not be parsed");
    }
    Ok(out)
}
