//! Stable exit codes inspected by the harness.

/// Step succeeded (including simulated success after N failures).
pub const OK: i32 = 0;
/// Step failed: simulated failure, missing metadata directory, or bad config.
pub const FAIL: i32 = 1;
