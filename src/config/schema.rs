//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the API.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the API gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Upstream content source.
    pub upstream: UpstreamConfig,

    /// Route-table inputs (the declared category names).
    pub routes: RoutesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:4000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:4000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Upstream content source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL every handler fetch is joined onto.
    pub base_url: String,

    /// Per-request timeout for upstream fetches in seconds.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://hianime.to/ajax".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Route-table inputs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Ordered category names served under `/api/<name>`.
    ///
    /// Evaluation order matters: the first name equal to the candidate wins,
    /// and the whole set is checked before the genre fallback.
    pub categories: Vec<String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            categories: [
                "most-favorite",
                "most-popular",
                "subbed-anime",
                "dubbed-anime",
                "recently-updated",
                "recently-added",
                "top-upcoming",
                "top-airing",
                "movie",
                "special",
                "ova",
                "ona",
                "tv",
                "completed",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let config = ApiConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: ApiConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.listener.bind_address, config.listener.bind_address);
        assert_eq!(parsed.routes.categories, config.routes.categories);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: ApiConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9999"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.listener.bind_address, "127.0.0.1:9999");
        assert_eq!(parsed.timeouts.request_secs, 30);
        assert!(!parsed.routes.categories.is_empty());
    }
}
