//! Stateful fixture step: records `VAR1`, `VAR2` and `run_id` to a state
//! file, but only when the invocation succeeds.

use anyhow::Result;
use clap::Parser;
use fixture::config::FixtureConfig;
use fixture::step::{Variant, run_step};

#[derive(Parser)]
#[command(
    name = "stateful",
    version,
    about = "WHAM test-fixture step that persists state on success"
)]
struct Cli {
    /// Echoed to output, otherwise ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(fixture::exit_codes::FAIL);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    fixture::logging::init();
    let config = FixtureConfig::from_env("stateful")?;
    run_step(
        &config,
        Variant::Stateful,
        &cli.args,
        &mut rand::thread_rng(),
        &mut std::io::stdout(),
    )
}
