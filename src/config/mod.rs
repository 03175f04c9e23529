//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → shared by value/Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All sections except `endpoints` have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A load or validation failure is fatal at startup; the daemon never
//!   monitors with undefined state

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{EmailConfig, EndpointConfig, ListenerConfig, MonitorConfig};
