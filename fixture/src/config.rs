//! Fixture configuration resolved from harness-injected environment
//! variables.
//!
//! Everything the two binaries read from the environment lands in one
//! [`FixtureConfig`] built at process start; the rest of the crate never
//! touches `std::env`.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

/// Static exit-code selection, consulted only when retry simulation is
/// disabled (`SIMULATE_FAIL_COUNT=0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitStatus {
    #[default]
    Success,
    Fail,
    /// Uniformly random success or failure, drawn from the injected rng.
    Random,
}

impl ExitStatus {
    /// Unrecognized values behave as `success`, same as the default.
    fn parse(raw: &str) -> Self {
        match raw {
            "fail" => ExitStatus::Fail,
            "random" => ExitStatus::Random,
            _ => ExitStatus::Success,
        }
    }
}

/// Settings for one fixture invocation.
///
/// The stateless binary carries the state-related fields (`var1`, `var2`,
/// `run_id`, `state_file`) too; it simply never uses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Step name the harness sees, used in banners and default file names.
    pub step_name: String,
    /// Informational only, echoed to output.
    pub data_dir: PathBuf,
    /// Holds the counter and state files; must exist or the step fails.
    pub metadata_dir: PathBuf,
    /// File name of the attempt counter, relative to `metadata_dir`.
    pub counter_file: String,
    /// File name of the persisted state, relative to `metadata_dir`.
    pub state_file: String,
    pub var1: String,
    pub var2: String,
    pub run_id: String,
    /// Number of attempts that must fail before success; 0 disables retry
    /// simulation.
    pub simulate_fail_count: u64,
    pub exit_status: ExitStatus,
    /// Suppress decorative ANSI coloring.
    pub no_color: bool,
}

impl FixtureConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env(step_name: &str) -> Result<Self> {
        Self::from_lookup(step_name, |key| env::var(key).ok())
    }

    /// Resolve configuration from an injected lookup, testable without
    /// mutating the process environment.
    pub fn from_lookup<F>(step_name: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: String| lookup(key).unwrap_or(default);

        let raw_fail_count = get("SIMULATE_FAIL_COUNT", "0".to_string());
        let simulate_fail_count: u64 = raw_fail_count
            .trim()
            .parse()
            .with_context(|| format!("parse SIMULATE_FAIL_COUNT {raw_fail_count:?}"))?;

        Ok(Self {
            step_name: step_name.to_string(),
            data_dir: PathBuf::from(get("VAR_DATA_DIR", "states/data".to_string())),
            metadata_dir: PathBuf::from(get("VAR_METADATA_DIR", "states/metadata".to_string())),
            counter_file: get("COUNTER_FILE", format!("{step_name}.counter")),
            state_file: get("STATE_FILE", format!("{step_name}.state")),
            var1: get("VAR1", "default_value_1".to_string()),
            var2: get("VAR2", "default_value_2".to_string()),
            run_id: get("RUN_ID", default_run_id()),
            simulate_fail_count,
            exit_status: ExitStatus::parse(&get("EXIT_STATUS", "success".to_string())),
            // Set-but-empty leaves coloring on.
            no_color: lookup("NO_COLOR").is_some_and(|value| !value.is_empty()),
        })
    }

    pub fn counter_path(&self) -> PathBuf {
        self.metadata_dir.join(&self.counter_file)
    }

    pub fn state_path(&self) -> PathBuf {
        self.metadata_dir.join(&self.state_file)
    }
}

/// Default run id: `YYYY_MM_DD_<epoch millis>` at process start.
fn default_run_id() -> String {
    let now = Local::now();
    format!("{}_{}", now.format("%Y_%m_%d"), now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_env(_key: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = FixtureConfig::from_lookup("stateful", empty_env).expect("config");
        assert_eq!(config.step_name, "stateful");
        assert_eq!(config.data_dir, PathBuf::from("states/data"));
        assert_eq!(config.metadata_dir, PathBuf::from("states/metadata"));
        assert_eq!(config.counter_file, "stateful.counter");
        assert_eq!(config.state_file, "stateful.state");
        assert_eq!(config.var1, "default_value_1");
        assert_eq!(config.var2, "default_value_2");
        assert_eq!(config.simulate_fail_count, 0);
        assert_eq!(config.exit_status, ExitStatus::Success);
        assert!(!config.no_color);
    }

    #[test]
    fn injected_values_override_defaults() {
        let config = FixtureConfig::from_lookup("stateless", |key| {
            match key {
                "VAR_METADATA_DIR" => Some("/tmp/meta".to_string()),
                "COUNTER_FILE" => Some("custom.counter".to_string()),
                "SIMULATE_FAIL_COUNT" => Some("3".to_string()),
                "EXIT_STATUS" => Some("fail".to_string()),
                "NO_COLOR" => Some("1".to_string()),
                _ => None,
            }
        })
        .expect("config");
        assert_eq!(config.metadata_dir, PathBuf::from("/tmp/meta"));
        assert_eq!(config.counter_path(), PathBuf::from("/tmp/meta/custom.counter"));
        assert_eq!(config.simulate_fail_count, 3);
        assert_eq!(config.exit_status, ExitStatus::Fail);
        assert!(config.no_color);
    }

    #[test]
    fn unparseable_fail_count_is_an_error() {
        let err = FixtureConfig::from_lookup("stateful", |key| {
            (key == "SIMULATE_FAIL_COUNT").then(|| "three".to_string())
        })
        .expect_err("should fail");
        assert!(format!("{err:#}").contains("SIMULATE_FAIL_COUNT"));
    }

    #[test]
    fn unrecognized_exit_status_behaves_as_success() {
        let config = FixtureConfig::from_lookup("stateful", |key| {
            (key == "EXIT_STATUS").then(|| "explode".to_string())
        })
        .expect("config");
        assert_eq!(config.exit_status, ExitStatus::Success);
    }

    #[test]
    fn empty_no_color_leaves_coloring_on() {
        let config = FixtureConfig::from_lookup("stateful", |key| {
            (key == "NO_COLOR").then(String::new)
        })
        .expect("config");
        assert!(!config.no_color);
    }

    #[test]
    fn default_run_id_has_date_prefix_and_millis_suffix() {
        let run_id = default_run_id();
        let parts: Vec<&str> = run_id.split('_').collect();
        assert_eq!(parts.len(), 4, "expected YYYY_MM_DD_millis, got {run_id}");
        assert!(parts[3].parse::<i64>().is_ok());
    }
}
