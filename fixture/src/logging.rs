//! Development-time tracing for debugging the fixtures.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to
//!   stderr. Never part of the fixture contract.
//!
//! - **Step output (`step`)**: Product output on stdout (banners, echoed
//!   variables). Always written, unaffected by `RUST_LOG`; this is what the
//!   harness reads.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for a fixture binary.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format. ANSI escapes are disabled when `NO_COLOR`
/// is set to a non-empty value, matching the product output.
///
/// # Example
/// ```bash
/// RUST_LOG=fixture=debug cargo run --bin stateful
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let no_color = std::env::var("NO_COLOR").is_ok_and(|value| !value.is_empty());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!no_color)
                .compact(),
        )
        .init();
}
