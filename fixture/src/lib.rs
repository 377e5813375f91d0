//! Test-fixture steps for the WHAM orchestration harness.
//!
//! Two binaries (`stateful` and `stateless`) each model one harness-invoked
//! step: echo diagnostic output, optionally simulate N failed attempts before
//! succeeding, optionally persist a small state file, and exit with a status
//! code the harness inspects. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure decision logic (retry thresholds, static exit modes).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (the attempt counter file and the
//!   persisted state file).
//!
//! [`step`] coordinates core logic with I/O to implement one fixture
//! invocation; the binaries are thin wrappers around it.

pub mod config;
pub mod console;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod step;
