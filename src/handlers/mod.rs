//! Content-handler boundary.
//!
//! # Data Flow
//! ```text
//! Dispatcher
//!     → HandlerId (registry key, resolved lazily)
//!     → Handler::handle(request, invocation)
//!     → Result<payload, HandlerError>
//!
//! Handlers fetch data from the upstream source via the shared client
//! (upstream.rs); their payload shape is opaque to the router.
//! ```
//!
//! # Design Decisions
//! - Handlers are trait objects so the registry can cache them uniformly
//! - Routing-derived inputs (category argument, stream fallback flag) travel
//!   in `Invocation`, never smuggled through `params`
//! - The router imposes no schema on handler payloads

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::HandlerError;
use crate::http::event::ApiRequest;

pub mod anime;
pub mod browse;
pub mod home;
pub mod people;
pub mod stream;
pub mod upstream;

pub use upstream::Upstream;

/// A content handler: fetches a data payload or fails with a message.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, req: &ApiRequest, call: &Invocation) -> Result<Value, HandlerError>;
}

/// Routing-derived inputs beyond the request itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Request only.
    Plain,

    /// Category/genre routing argument as an explicit second input.
    Category(String),

    /// Stream routes carry the fallback flag as an explicit third input.
    Stream { fallback: bool },
}

/// Registry key for a content handler, resolved to a callable at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerId {
    HomeInfo,
    TopTen,
    TopSearch,
    AnimeInfo,
    EpisodeList,
    Servers,
    StreamInfo,
    Search,
    Filter,
    Schedule,
    Random,
    RandomId,
    Qtip,
    Producer,
    VoiceActorList,
    Actors,
    Character,
    Category,
}

impl HandlerId {
    /// Stable name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::HomeInfo => "home-info",
            Self::TopTen => "top-ten",
            Self::TopSearch => "top-search",
            Self::AnimeInfo => "anime-info",
            Self::EpisodeList => "episode-list",
            Self::Servers => "servers",
            Self::StreamInfo => "stream-info",
            Self::Search => "search",
            Self::Filter => "filter",
            Self::Schedule => "schedule",
            Self::Random => "random",
            Self::RandomId => "random-id",
            Self::Qtip => "qtip",
            Self::Producer => "producer",
            Self::VoiceActorList => "voice-actor-list",
            Self::Actors => "actors",
            Self::Character => "character",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
