//! HTTP Endpoint Monitoring Daemon Library

pub mod config;
pub mod dashboard;
pub mod lifecycle;
pub mod monitor;
pub mod notify;
pub mod probe;

pub use config::schema::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::scheduler::Scheduler;
pub use monitor::store::StateStore;
