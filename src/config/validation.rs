//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check endpoint names are unique and URLs well-formed
//! - Validate value ranges (intervals > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::MonitorConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("no endpoints configured")]
    NoEndpoints,

    #[error("duplicate endpoint name: {0}")]
    DuplicateName(String),

    #[error("endpoint {name}: invalid url {url:?}: {reason}")]
    InvalidUrl {
        name: String,
        url: String,
        reason: String,
    },

    #[error("endpoint {0}: interval must be greater than zero")]
    ZeroInterval(String),

    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }

    let mut seen = HashSet::new();
    for endpoint in &config.endpoints {
        if !seen.insert(endpoint.name.as_str()) {
            errors.push(ValidationError::DuplicateName(endpoint.name.clone()));
        }

        if let Err(e) = Url::parse(&endpoint.url) {
            errors.push(ValidationError::InvalidUrl {
                name: endpoint.name.clone(),
                url: endpoint.url.clone(),
                reason: e.to_string(),
            });
        }

        if endpoint.interval_secs == 0 {
            errors.push(ValidationError::ZeroInterval(endpoint.name.clone()));
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
