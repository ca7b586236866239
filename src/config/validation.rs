//! Configuration validation.
//!
//! Semantic checks only; serde handles syntax. All errors are collected,
//! not just the first one.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("backend.api_url '{url}' is not a valid URL: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("backend.api_url '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("listener.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.backend.api_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UnsupportedScheme(config.backend.api_url.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidApiUrl {
            url: config.backend.api_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.backend.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("backend.connect_timeout_secs"));
    }
    if config.backend.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("backend.request_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
