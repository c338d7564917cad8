//! Shared upstream client.
//!
//! # Responsibilities
//! - Own the single reqwest client used by every content handler
//! - Join endpoint segments onto the configured base URL
//! - Forward request query parameters to the upstream
//!
//! # Design Decisions
//! - One client per process; handlers share it via Arc
//! - Non-success upstream statuses become handler failures, never partial
//!   payloads

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::config::schema::UpstreamConfig;
use crate::error::HandlerError;

/// HTTP client bound to the upstream content source.
pub struct Upstream {
    client: reqwest::Client,
    base: Url,
}

impl Upstream {
    /// Build the client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, HandlerError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| HandlerError::msg(format!("invalid upstream base URL: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("anime-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }

    /// GET `{base}/{path}?{query}` and decode the JSON body.
    pub async fn get_json(
        &self,
        path: &str,
        query: &HashMap<String, String>,
    ) -> Result<Value, HandlerError> {
        let url = self.endpoint(path, query)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HandlerError::UpstreamStatus(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    fn endpoint(&self, path: &str, query: &HashMap<String, String>) -> Result<Url, HandlerError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| HandlerError::msg("upstream base URL cannot be a base"))?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(base: &str) -> Upstream {
        Upstream::new(&UpstreamConfig {
            base_url: base.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let up = upstream("https://example.com/ajax");
        let url = up.endpoint("episode/list/100", &HashMap::new()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/ajax/episode/list/100");
    }

    #[test]
    fn test_endpoint_appends_query() {
        let up = upstream("https://example.com");
        let mut query = HashMap::new();
        query.insert("q".to_string(), "one piece".to_string());
        let url = up.endpoint("search", &query).unwrap();
        assert_eq!(url.as_str(), "https://example.com/search?q=one+piece");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(Upstream::new(&UpstreamConfig {
            base_url: "not a url".to_string(),
            timeout_secs: 5,
        })
        .is_err());
    }
}
