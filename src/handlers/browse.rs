//! Discovery handlers: search, filter, category/genre listing.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Handler, Invocation, Upstream};
use crate::error::HandlerError;
use crate::http::event::ApiRequest;

/// Keyword search; `q`, `page` and friends pass through the query string.
pub struct SearchHandler {
    upstream: Arc<Upstream>,
}

impl SearchHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for SearchHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("search", &req.query).await
    }
}

/// Faceted filter (type, status, season, language, sort, ...).
pub struct FilterHandler {
    upstream: Arc<Upstream>,
}

impl FilterHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for FilterHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("filter", &req.query).await
    }
}

/// Category and genre listings.
///
/// The routing argument (a declared category name, or `genre/<name>` via the
/// fallback rule) selects the upstream listing; it arrives through
/// [`Invocation::Category`], never through `params`.
pub struct CategoryHandler {
    upstream: Arc<Upstream>,
}

impl CategoryHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for CategoryHandler {
    async fn handle(&self, req: &ApiRequest, call: &Invocation) -> Result<Value, HandlerError> {
        let Invocation::Category(route_type) = call else {
            return Err(HandlerError::msg("category handler invoked without a routing argument"));
        };
        self.upstream.get_json(route_type, &req.query).await
    }
}
