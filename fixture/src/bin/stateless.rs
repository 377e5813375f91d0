//! Stateless fixture step: decides an exit code and echoes its inputs, but
//! never persists state.

use anyhow::Result;
use clap::Parser;
use fixture::config::FixtureConfig;
use fixture::step::{Variant, run_step};

#[derive(Parser)]
#[command(
    name = "stateless",
    version,
    about = "WHAM test-fixture step that never persists state"
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
    let config = FixtureConfig::from_env("stateless")?;
    run_step(
        &config,
        Variant::Stateless,
        &cli.args,
        &mut rand::thread_rng(),
        &mut std::io::stdout(),
    )
}
