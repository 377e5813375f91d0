//! Side-effecting operations: the counter and state files under the
//! metadata directory.

pub mod counter;
pub mod state_file;
