//! HTTP probing.
//!
//! # Responsibilities
//! - Issue a single GET against a target URL with a hard timeout
//! - Capture the result as data: status code, latency, timestamp
//!
//! # Design Decisions
//! - Every transport failure (refused, DNS, TLS, timeout) collapses into
//!   `ProbeStatus::Error`; the probe never returns a Rust error
//! - No retries here; retry granularity is the scheduler tick
//! - Latency is rounded to millisecond precision and absent on failure

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Default per-request timeout for probes.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one HTTP exchange, successful or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The exchange completed; any status code, not only 200.
    Http(u16),
    /// The exchange failed below the HTTP layer.
    Error,
}

impl ProbeStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeStatus::Http(200))
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeStatus::Http(code) => write!(f, "{}", code),
            ProbeStatus::Error => write!(f, "Error"),
        }
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: ProbeStatus,
    /// Elapsed wall time in seconds, rounded to 3 decimals. Absent on failure.
    pub latency_secs: Option<f64>,
    pub checked_at: DateTime<Local>,
}

/// Probe issuing GET requests with a fixed timeout.
pub struct Probe {
    client: reqwest::Client,
    timeout: Duration,
}

impl Probe {
    /// Create a probe with the default 10s timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Check one URL. Failures are captured into the outcome, never returned.
    pub async fn check(&self, url: &str) -> Outcome {
        let start = Instant::now();
        let result = self.client.get(url).timeout(self.timeout).send().await;
        let checked_at = Local::now();

        match result {
            Ok(response) => {
                let elapsed = start.elapsed().as_secs_f64();
                Outcome {
                    status: ProbeStatus::Http(response.status().as_u16()),
                    latency_secs: Some(round_millis(elapsed)),
                    checked_at,
                }
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Probe failed");
                Outcome {
                    status: ProbeStatus::Error,
                    latency_secs: None,
                    checked_at,
                }
            }
        }
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}

fn round_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}
