//! People handlers: producers, characters, voice actors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Handler, Invocation, Upstream};
use crate::error::HandlerError;
use crate::http::event::ApiRequest;

fn path_id(req: &ApiRequest) -> Result<&str, HandlerError> {
    req.params
        .get("id")
        .map(String::as_str)
        .ok_or(HandlerError::MissingParam("id"))
}

/// Titles released by one producer/studio.
pub struct ProducerHandler {
    upstream: Arc<Upstream>,
}

impl ProducerHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for ProducerHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        let id = path_id(req)?;
        self.upstream
            .get_json(&format!("producer/{id}"), &req.query)
            .await
    }
}

/// Character/voice-actor list for one title.
pub struct VoiceActorListHandler {
    upstream: Arc<Upstream>,
}

impl VoiceActorListHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for VoiceActorListHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        let id = path_id(req)?;
        self.upstream
            .get_json(&format!("character/list/{id}"), &req.query)
            .await
    }
}

/// Detail page for one voice actor.
pub struct ActorsHandler {
    upstream: Arc<Upstream>,
}

impl ActorsHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for ActorsHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        let id = path_id(req)?;
        self.upstream
            .get_json(&format!("actors/{id}"), &req.query)
            .await
    }
}

/// Detail page for one character.
pub struct CharacterHandler {
    upstream: Arc<Upstream>,
}

impl CharacterHandler {
    pub fn new(upstream: Arc<Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Handler for CharacterHandler {
    async fn handle(&self, req: &ApiRequest, _call: &Invocation) -> Result<Value, HandlerError> {
        let id = path_id(req)?;
        self.upstream
            .get_json(&format!("character/{id}"), &req.query)
            .await
    }
}
