//! Shared constants and invariants

/// Interval between existence checks in the wait-for-file loop.
pub const WAIT_POLL_INTERVAL_MS: u64 = 100;
