//! Landing and chart handlers: home info, top ten, top search, schedule.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Handler, Invocation, Upstream};
use crate::error::HandlerError;
use crate::http::event::ApiRequest;

/// Aggregated landing-page data (spotlight, trending, latest).
pub struct HomeInfoHandler {
    upstream: Arc<Upstream>,
}

impl HomeInfoHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for HomeInfoHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("home", &req.query).await
    }
}

/// Top-ten charts (day, week, month).
pub struct TopTenHandler {
    upstream: Arc<Upstream>,
}

impl TopTenHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for TopTenHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("top-ten", &req.query).await
    }
}

/// Most-searched titles.
pub struct TopSearchHandler {
    upstream: Arc<Upstream>,
}

impl TopSearchHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for TopSearchHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("top-search", &req.query).await
    }
}

/// Airing schedule; `date` comes through the query untouched.
pub struct ScheduleHandler {
    upstream: Arc<Upstream>,
}

impl ScheduleHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for ScheduleHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        self.upstream.get_json("schedule/list", &req.query).await
    }
}
