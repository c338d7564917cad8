//! Inbound event normalization.
//!
//! # Responsibilities
//! - Represent the platform inbound event (method, path, optional query)
//! - Normalize it into the canonical request handed to handlers
//!
//! # Design Decisions
//! - Absent query becomes an empty map, never an error
//! - No validation of method/path shape; an unmatched path is a routing
//!   no-match, not a normalization failure
//! - `params` is decided by the dispatcher, not here

use std::collections::HashMap;

/// Raw event as delivered by the hosting platform, one per invocation.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    /// HTTP method, uppercase (e.g. "GET").
    pub method: String,

    /// Full request path, case-sensitive, not normalized.
    pub path: String,

    /// Flat query parameters, absent when the platform passes none.
    pub query: Option<HashMap<String, String>>,
}

impl InboundEvent {
    /// Convenience constructor for a GET event without query parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.into(),
            query: None,
        }
    }
}

/// Canonical request consumed read-only by exactly one handler.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub params: HashMap<String, String>,
}

impl ApiRequest {
    /// Normalize an inbound event, attaching path-derived parameters.
    pub fn from_event(event: InboundEvent, params: HashMap<String, String>) -> Self {
        Self {
            method: event.method,
            path: event.path,
            query: event.query.unwrap_or_default(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_query_becomes_empty_map() {
        let event = InboundEvent::get("/api/search");
        let req = ApiRequest::from_event(event, HashMap::new());
        assert!(req.query.is_empty());
        assert!(req.params.is_empty());
    }

    #[test]
    fn test_query_and_params_pass_through() {
        let mut query = HashMap::new();
        query.insert("q".to_string(), "naruto".to_string());
        let event = InboundEvent {
            method: "GET".to_string(),
            path: "/api/search".to_string(),
            query: Some(query),
        };
        let mut params = HashMap::new();
        params.insert("id".to_string(), "42".to_string());

        let req = ApiRequest::from_event(event, params);
        assert_eq!(req.query.get("q").map(String::as_str), Some("naruto"));
        assert_eq!(req.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_malformed_path_passes_through_unchanged() {
        let event = InboundEvent::get("");
        let req = ApiRequest::from_event(event, HashMap::new());
        assert_eq!(req.path, "");
    }
}
