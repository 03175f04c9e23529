//! Monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler (scheduler.rs):
//!     Shared-interval timer
//!     → Probe each endpoint in registration order
//!     → Apply outcome to its EndpointState (state.rs)
//!     → Publish the fresh record to the StateStore (store.rs)
//!     → Invoke the notifier once the failure threshold is crossed
//!
//! Dashboard:
//!     StateStore::snapshot() → consistent read-only copy
//! ```
//!
//! # Design Decisions
//! - The scheduler is the single writer; the dashboard only ever reads
//!   snapshots
//! - Records are replaced whole under the store's write lock, so a reader
//!   can never observe a half-applied check
//! - One shared tick cadence (minimum configured interval) for all
//!   endpoints, not per-endpoint timers

pub mod scheduler;
pub mod state;
pub mod store;

pub use scheduler::Scheduler;
pub use state::EndpointState;
pub use store::StateStore;
