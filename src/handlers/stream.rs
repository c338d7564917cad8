//! Stream-source handler.
//!
//! The only handler that declares an environment capability: extracting
//! stream sources can buffer media manifests to disk, so the registry
//! establishes a writable scratch directory once per process before this
//! handler is ever constructed (see `dispatch::registry::Capability`).

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Handler, Invocation, Upstream};
use crate::error::HandlerError;
use crate::http::event::ApiRequest;

/// Stream source extraction; `fallback` selects the secondary extractor.
pub struct StreamInfoHandler {
    upstream: Arc<Upstream>,
}

impl StreamInfoHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for StreamInfoHandler {
    async fn handle(&self, req: &ApiRequest, call: &Invocation) -> Result<Value, HandlerError> {
        let fallback = match call {
            Invocation::Stream { fallback } => *fallback,
            _ => false,
        };
        let mut query = req.query.clone();
        if fallback {
            query.insert("fallback".to_string(), "true".to_string());
        }
        self.upstream.get_json("episode/sources", &query).await
    }
}
