//! Orchestration for one fixture invocation.
//!
//! Order of operations, which the harness relies on:
//! 1. Metadata-directory precondition check (fatal on failure, nothing
//!    written).
//! 2. Step info echoed to output.
//! 3. Exit-code decision: retry simulation when `SIMULATE_FAIL_COUNT > 0`,
//!    otherwise the static `EXIT_STATUS` mode. Under retry simulation the
//!    counter is advanced before the decision is reported.
//! 4. Stateful variant only: state file written, only on success.

use std::io::Write;

use anyhow::Result;
use rand::Rng;

use crate::config::FixtureConfig;
use crate::console::Palette;
use crate::core::decision::{StepOutcome, decide_retry, decide_static};
use crate::exit_codes;
use crate::io::counter::{load_counter, store_counter};
use crate::io::state_file::{StateRecord, write_state};

/// Which of the two fixture variants is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Decides an exit code only; never writes a state file.
    Stateless,
    /// Additionally records `VAR1`, `VAR2` and `run_id` on success.
    Stateful,
}

/// Run one fixture invocation and return the process exit code.
///
/// `args` are the positional CLI arguments; they are echoed to output and
/// otherwise ignored. Product output goes to `out` so tests can capture it.
pub fn run_step<R: Rng, W: Write>(
    config: &FixtureConfig,
    variant: Variant,
    args: &[String],
    rng: &mut R,
    out: &mut W,
) -> Result<i32> {
    let colors = Palette::new(config.no_color);

    // Precondition: refuse to run against a missing metadata directory, so
    // neither the counter nor the state file lands in a nonexistent location.
    if !config.metadata_dir.is_dir() {
        writeln!(
            out,
            "{}### ERROR: Metadata directory {} does not exist!{}",
            colors.red,
            config.metadata_dir.display(),
            colors.reset
        )?;
        return Ok(exit_codes::FAIL);
    }

    print_step_info(config, variant, args, &colors, out)?;

    let outcome = if config.simulate_fail_count > 0 {
        let counter_path = config.counter_path();
        let decision = decide_retry(config.simulate_fail_count, load_counter(&counter_path));
        // Advance the counter before reporting the decision; a crash after
        // this point still leaves the attempt recorded.
        store_counter(&counter_path, decision.next_counter)?;
        match decision.outcome {
            StepOutcome::Failure => writeln!(
                out,
                "{}### Simulating failure attempt #{} (will succeed after {} failures) ###{}",
                colors.red, decision.attempt, config.simulate_fail_count, colors.reset
            )?,
            StepOutcome::Success => writeln!(
                out,
                "{}### Simulating success after {} failures ###{}",
                colors.green, config.simulate_fail_count, colors.reset
            )?,
        }
        decision.outcome
    } else {
        decide_static(config.exit_status, rng)
    };

    if variant == Variant::Stateful && outcome == StepOutcome::Success {
        let state_path = config.state_path();
        writeln!(
            out,
            "{}WRITING STATE TO '{}{}{}'...{}",
            colors.blue,
            colors.green,
            state_path.display(),
            colors.blue,
            colors.reset
        )?;
        write_state(
            &state_path,
            &StateRecord {
                var1: config.var1.clone(),
                var2: config.var2.clone(),
                run_id: config.run_id.clone(),
            },
        )?;
    }

    let code = outcome.exit_code();
    writeln!(
        out,
        "{}### EXITING WITH EXIT CODE {}{}{} ###{}",
        colors.blue, colors.green, code, colors.blue, colors.reset
    )?;
    Ok(code)
}

fn print_step_info<W: Write>(
    config: &FixtureConfig,
    variant: Variant,
    args: &[String],
    colors: &Palette,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "{}### STARTING '{}{}{}' ###{}",
        colors.blue, colors.green, config.step_name, colors.blue, colors.reset
    )?;
    print_kv(out, colors, "DATA_DIR", &config.data_dir.display().to_string())?;
    print_kv(
        out,
        colors,
        "METADATA_DIR",
        &config.metadata_dir.display().to_string(),
    )?;
    print_kv(out, colors, "CLI PARAMETERS", &args.join(" "))?;
    if variant == Variant::Stateful {
        print_kv(out, colors, "VAR1", &config.var1)?;
        print_kv(out, colors, "VAR2", &config.var2)?;
    }
    Ok(())
}

fn print_kv<W: Write>(out: &mut W, colors: &Palette, key: &str, value: &str) -> Result<()> {
    writeln!(
        out,
        "{}{}{} = {}{}{}",
        colors.blue, key, colors.reset, colors.green, value, colors.reset
    )?;
    Ok(())
}
