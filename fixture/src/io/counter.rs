//! The attempt counter: a file used as an integer register.
//!
//! The harness owns the counter's lifecycle; it resets a fixture by deleting
//! the file between test runs. This module never deletes it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read how many attempts have already occurred.
///
/// A missing or unparseable file reads as 0. That is recovery policy, not an
/// error: a corrupt counter must never abort a step.
pub fn load_counter(path: &Path) -> u64 {
    let value = fs::read_to_string(path)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0);
    debug!(path = %path.display(), value, "counter loaded");
    value
}

/// Overwrite the counter with a new value.
pub fn store_counter(path: &Path, value: u64) -> Result<()> {
    debug!(path = %path.display(), value, "storing counter");
    fs::write(path, value.to_string())
        .with_context(|| format!("write counter {}", path.display()))?;
    Ok(())
}
