//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, parseable addresses/URLs)
//! - Check category names are usable as path segments
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ApiConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ApiConfig;

/// One semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn error(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ApiConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(error(
            "listener.bind_address",
            format!("not a valid socket address: {:?}", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(error("timeouts.request_secs", "must be greater than zero"));
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(error("upstream.timeout_secs", "must be greater than zero"));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.cannot_be_a_base() => {
            errors.push(error("upstream.base_url", "URL cannot be a base"));
        }
        Ok(_) => {}
        Err(e) => errors.push(error("upstream.base_url", e.to_string())),
    }

    if config.routes.categories.is_empty() {
        errors.push(error("routes.categories", "at least one category is required"));
    }
    for name in &config.routes.categories {
        if name.is_empty() || name.starts_with('/') || name.contains(char::is_whitespace) {
            errors.push(error(
                "routes.categories",
                format!("{name:?} is not a valid path segment"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
