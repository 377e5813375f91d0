//! Exit-code decisions: the retry/attempt-counter protocol and the static
//! fallback modes.
//!
//! The counter value itself lives in [`crate::io::counter`]; this module only
//! sees the integer, which keeps the protocol testable without a filesystem.

use rand::Rng;

use crate::config::ExitStatus;
use crate::exit_codes;

/// Outcome reported by a single fixture invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Success,
    Failure,
}

impl StepOutcome {
    /// Process exit code the harness inspects.
    pub fn exit_code(self) -> i32 {
        match self {
            StepOutcome::Success => exit_codes::OK,
            StepOutcome::Failure => exit_codes::FAIL,
        }
    }
}

/// Decision for one invocation under retry simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryDecision {
    pub outcome: StepOutcome,
    /// 1-based number of the attempt this invocation represents.
    pub attempt: u64,
    /// Counter value to persist: always prior + 1, success or failure alike.
    /// The counter tracks attempts made, not successes.
    pub next_counter: u64,
}

/// Decide the outcome of the current attempt under retry simulation.
///
/// `prior_attempts` is the counter value read from disk: how many attempts
/// have already occurred. The first `fail_threshold` attempts fail; every
/// later attempt succeeds. Because the counter keeps advancing past the
/// threshold, a sequence of invocations against one counter yields exactly
/// `fail_threshold` failures followed by success forever after.
pub fn decide_retry(fail_threshold: u64, prior_attempts: u64) -> RetryDecision {
    let outcome = if prior_attempts < fail_threshold {
        StepOutcome::Failure
    } else {
        StepOutcome::Success
    };
    RetryDecision {
        outcome,
        attempt: prior_attempts + 1,
        next_counter: prior_attempts + 1,
    }
}

/// Decide the outcome when retry simulation is disabled.
///
/// The rng is injected so the `random` mode stays deterministic under test;
/// the binaries pass `rand::thread_rng()`.
pub fn decide_static<R: Rng>(status: ExitStatus, rng: &mut R) -> StepOutcome {
    match status {
        ExitStatus::Success => StepOutcome::Success,
        ExitStatus::Fail => StepOutcome::Failure,
        ExitStatus::Random => {
            if rng.gen_range(0..=1) == 0 {
                StepOutcome::Success
            } else {
                StepOutcome::Failure
            }
        }
    }
}
