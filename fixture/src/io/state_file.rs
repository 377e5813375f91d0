//! Persisted state written by the stateful fixture on success.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Variables recorded by the stateful fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    pub var1: String,
    pub var2: String,
    pub run_id: String,
}

/// Render the record as `key=value` lines in fixed order.
pub fn render_state(record: &StateRecord) -> String {
    format!(
        "VAR1={}\nVAR2={}\nrun_id={}\n",
        record.var1, record.var2, record.run_id
    )
}

/// Overwrite the state file at `path`.
///
/// Called only on success paths, so a failed attempt never leaves a stale
/// record behind.
pub fn write_state(path: &Path, record: &StateRecord) -> Result<()> {
    debug!(path = %path.display(), run_id = %record.run_id, "writing state");
    fs::write(path, render_state(record))
        .with_context(|| format!("write state {}", path.display()))?;
    Ok(())
}
