//! Per-endpoint health record.
//!
//! # State Transitions
//! ```text
//! check → HTTP 200              : consecutive_errors = 0
//! check → anything else         : consecutive_errors += 1
//! ```
//!
//! Any non-200 status (404, 500, ...) counts as a failure exactly like a
//! transport error. That is the monitoring policy, not an accident.

use chrono::{DateTime, Local};

use crate::probe::{Outcome, ProbeStatus};

/// Mutable record of one monitored endpoint's latest check.
///
/// Created once per configured endpoint at startup and updated in place by
/// every check; never destroyed while the process runs.
#[derive(Debug, Clone)]
pub struct EndpointState {
    /// Display name, copied from config.
    pub name: String,
    /// Probed URL, copied from config for display.
    pub url: String,
    /// Latest status; `None` before the first check completes.
    pub status: Option<ProbeStatus>,
    /// Latest response latency in seconds; absent on failure.
    pub latency_secs: Option<f64>,
    /// When the latest check finished.
    pub last_checked: Option<DateTime<Local>>,
    /// Checks in a row since the last HTTP 200 (or since startup).
    pub consecutive_errors: u32,
}

impl EndpointState {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            status: None,
            latency_secs: None,
            last_checked: None,
            consecutive_errors: 0,
        }
    }

    /// Fold one check outcome into the record.
    pub fn apply(&mut self, outcome: &Outcome) {
        self.status = Some(outcome.status);
        self.latency_secs = outcome.latency_secs;
        self.last_checked = Some(outcome.checked_at);

        if outcome.status.is_ok() {
            self.consecutive_errors = 0;
        } else {
            self.consecutive_errors += 1;
        }
    }

    /// True once the latest check returned HTTP 200.
    pub fn is_healthy(&self) -> bool {
        self.status.is_some_and(|s| s.is_ok())
    }
}
