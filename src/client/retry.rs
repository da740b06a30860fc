//! Bounded retry for idempotent reads.
//!
//! Only GET operations consult this. Writes are issued exactly once.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How many times a failed read is tried, and how long to wait in between.
///
/// The wait doubles after every failure, up to `max_backoff_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadRetry {
    /// Total tries per read, the first one included
    pub attempts: u32,

    /// Wait after the first failure, in milliseconds
    pub backoff_ms: u64,

    /// Upper bound for any single wait, in milliseconds
    pub max_backoff_ms: u64,
}

impl Default for ReadRetry {
    fn default() -> Self {
        Self::disabled()
    }
}

impl ReadRetry {
    /// Every read is tried once
    pub fn disabled() -> Self {
        Self {
            attempts: 1,
            backoff_ms: 250,
            max_backoff_ms: 4000,
        }
    }

    /// Whether a read that just failed on try `attempt` (1-based) gets another
    pub fn allows_another(&self, attempt: u32) -> bool {
        attempt < self.attempts
    }

    /// Wait before the try following `attempt`
    pub fn backoff(&self, attempt: u32) -> Duration {
        let doublings = attempt.saturating_sub(1).min(32);
        let wait = self.backoff_ms.saturating_mul(1u64 << doublings);
        Duration::from_millis(wait.min(self.max_backoff_ms))
    }
}
