//! Per-title handlers: info, episodes, servers, qtip, random.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Handler, Invocation, Upstream};
use crate::error::HandlerError;
use crate::http::event::ApiRequest;

/// Full detail page for one title; the id arrives via the query string.
pub struct AnimeInfoHandler {
    upstream: Arc<Upstream>,
}

impl AnimeInfoHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for AnimeInfoHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        let id = req
            .query
            .get("id")
            .ok_or(HandlerError::MissingParam("id"))?;
        self.upstream
            .get_json(&format!("anime/{id}"), &req.query)
            .await
    }
}

/// Episode list for a title; the id is extracted from the path.
pub struct EpisodeListHandler {
    upstream: Arc<Upstream>,
}

impl EpisodeListHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for EpisodeListHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        let id = req
            .params
            .get("id")
            .ok_or(HandlerError::MissingParam("id"))?;
        self.upstream
            .get_json(&format!("episode/list/{id}"), &req.query)
            .await
    }
}

/// Available servers for one episode; driven entirely by the query string,
/// the trailing path segment is consumed upstream.
pub struct ServersHandler {
    upstream: Arc<Upstream>,
}

impl ServersHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for ServersHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("episode/servers", &req.query).await
    }
}

/// Hover-card (qtip) data for one title.
pub struct QtipHandler {
    upstream: Arc<Upstream>,
}

impl QtipHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for QtipHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        let id = req
            .params
            .get("id")
            .ok_or(HandlerError::MissingParam("id"))?;
        self.upstream
            .get_json(&format!("movie/qtip/{id}"), &req.query)
            .await
    }
}

/// Random title with full info payload.
pub struct RandomHandler {
    upstream: Arc<Upstream>,
}

impl RandomHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for RandomHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("random", &req.query).await
    }
}

/// Random title id only (cheap variant of the random route).
pub struct RandomIdHandler {
    upstream: Arc<Upstream>,
}

impl RandomIdHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for RandomIdHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("random/id", &req.query).await
    }
}
