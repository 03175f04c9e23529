//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Init tracing → Load config (fatal on error) → Build store/notifier
//!     → Spawn scheduler → Bind dashboard listener last
//!
//! Shutdown (shutdown.rs):
//!     SIGTERM/SIGINT (signals.rs) → broadcast → scheduler loop exits,
//!     dashboard server drains and stops
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
