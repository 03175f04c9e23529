//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML config
//! file. Everything here is read-only after startup.

use serde::{Deserialize, Serialize};

/// Root configuration for the monitoring daemon.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Dashboard listener configuration.
    pub listener: ListenerConfig,

    /// Endpoints to monitor, in the order they should be checked.
    pub endpoints: Vec<EndpointConfig>,

    /// Email alert settings. Absent ⇒ alerts disabled.
    pub email: Option<EmailConfig>,
}

/// Dashboard listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// One monitored endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EndpointConfig {
    /// Display name, unique within the monitored set.
    pub name: String,

    /// URL to probe with a GET request.
    pub url: String,

    /// Desired check interval in seconds (default: 60).
    ///
    /// All endpoints are checked on one shared cadence: the minimum
    /// interval among the whole set.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    60
}

/// SMTP settings for email alerts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay hostname.
    pub smtp_server: String,

    /// SMTP relay port (default: 587, the STARTTLS submission port).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Relay username; also used as the From address.
    pub username: String,

    /// Relay password.
    pub password: String,

    /// Alert recipient address.
    pub to_email: String,
}

fn default_smtp_port() -> u16 {
    587
}
