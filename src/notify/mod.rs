//! Alerting subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler observes consecutive_errors >= ALERT_THRESHOLD
//!     → Notifier::maybe_alert(state)
//!     → email.rs composes and sends over SMTP (STARTTLS)
//!
//! No [email] config section
//!     → NullNotifier (every alert is a no-op)
//! ```
//!
//! # Design Decisions
//! - `maybe_alert` re-checks the threshold even though the scheduler
//!   already filtered; a notifier must be safe to call on any state
//! - Alerts re-fire on every failing tick once the threshold is reached;
//!   there is no de-duplication or rate limiting
//! - Delivery failures are logged and swallowed; they never reach the
//!   scheduler loop and are not retried within the tick

pub mod email;

use async_trait::async_trait;

use crate::monitor::state::EndpointState;

pub use email::EmailNotifier;

/// Consecutive-error count at which alerts start firing.
pub const ALERT_THRESHOLD: u32 = 2;

/// Outbound alert channel consumed by the scheduler.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send an alert for `state` if it warrants one. Must never fail
    /// loudly; delivery problems are the notifier's to log and swallow.
    async fn maybe_alert(&self, state: &EndpointState);
}

/// Notifier used when no alert channel is configured.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn maybe_alert(&self, _state: &EndpointState) {}
}
