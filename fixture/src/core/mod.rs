//! Pure decision logic for fixture steps. No I/O.

pub mod decision;
