//! Lazy handler registry.
//!
//! # Responsibilities
//! - Map a handler id to a callable, constructing it on first use only
//! - Cache resolutions for the process lifetime (idempotent, concurrent-safe)
//! - Verify declared environment capabilities once per process before a
//!   dependent handler is constructed
//!
//! # Design Decisions
//! - DashMap entry locking serializes concurrent first-time resolution of the
//!   same id; later lookups reuse the cached Arc
//! - Factory failures surface as handler failures; the envelope does not
//!   distinguish them from handler-logic errors
//! - Capability checks are OnceLock-guarded preconditions, not call-site
//!   patching

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::HandlerError;
use crate::handlers::{
    anime, browse, home, people, stream, Handler, HandlerId, Upstream,
};

type BuildFn = Box<dyn Fn() -> Result<Arc<dyn Handler>, HandlerError> + Send + Sync>;

/// An environment precondition a handler may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// A writable scratch directory for media manifest buffering.
    ScratchDir,
}

static SCRATCH_DIR: OnceLock<Result<PathBuf, String>> = OnceLock::new();

impl Capability {
    /// Establish the capability, at most once per process.
    pub fn ensure(self) -> Result<(), HandlerError> {
        match self {
            Self::ScratchDir => {
                let result = SCRATCH_DIR.get_or_init(|| {
                    let dir = std::env::temp_dir().join("anime-api");
                    std::fs::create_dir_all(&dir)
                        .map(|()| dir)
                        .map_err(|e| e.to_string())
                });
                match result {
                    Ok(_) => Ok(()),
                    Err(e) => Err(HandlerError::Capability(e.clone())),
                }
            }
        }
    }

    /// The scratch directory, when [`Capability::ScratchDir`] has been
    /// established.
    pub fn scratch_dir() -> Option<&'static PathBuf> {
        SCRATCH_DIR.get().and_then(|r| r.as_ref().ok())
    }
}

struct Factory {
    requires: &'static [Capability],
    build: BuildFn,
}

/// Resolve-once map from handler ids to callables.
pub struct HandlerRegistry {
    factories: HashMap<HandlerId, Factory>,
    resolved: DashMap<HandlerId, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// Empty registry; handlers are added with [`register`](Self::register).
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            resolved: DashMap::new(),
        }
    }

    /// Register a factory for one handler id.
    pub fn register<F>(&mut self, id: HandlerId, requires: &'static [Capability], build: F)
    where
        F: Fn() -> Result<Arc<dyn Handler>, HandlerError> + Send + Sync + 'static,
    {
        self.factories.insert(
            id,
            Factory {
                requires,
                build: Box::new(build),
            },
        );
    }

    /// The full production handler set, all backed by the shared upstream.
    pub fn standard(upstream: Arc<Upstream>) -> Self {
        let mut registry = Self::new();

        macro_rules! wire {
            ($id:expr, $requires:expr, $ctor:path) => {{
                let up = upstream.clone();
                registry.register($id, $requires, move || {
                    Ok(Arc::new($ctor(up.clone())) as Arc<dyn Handler>)
                });
            }};
        }

        wire!(HandlerId::HomeInfo, &[], home::HomeInfoHandler::new);
        wire!(HandlerId::TopTen, &[], home::TopTenHandler::new);
        wire!(HandlerId::TopSearch, &[], home::TopSearchHandler::new);
        wire!(HandlerId::Schedule, &[], home::ScheduleHandler::new);
        wire!(HandlerId::AnimeInfo, &[], anime::AnimeInfoHandler::new);
        wire!(HandlerId::EpisodeList, &[], anime::EpisodeListHandler::new);
        wire!(HandlerId::Servers, &[], anime::ServersHandler::new);
        wire!(HandlerId::Qtip, &[], anime::QtipHandler::new);
        wire!(HandlerId::Random, &[], anime::RandomHandler::new);
        wire!(HandlerId::RandomId, &[], anime::RandomIdHandler::new);
        wire!(
            HandlerId::StreamInfo,
            &[Capability::ScratchDir],
            stream::StreamInfoHandler::new
        );
        wire!(HandlerId::Search, &[], browse::SearchHandler::new);
        wire!(HandlerId::Filter, &[], browse::FilterHandler::new);
        wire!(HandlerId::Category, &[], browse::CategoryHandler::new);
        wire!(HandlerId::Producer, &[], people::ProducerHandler::new);
        wire!(
            HandlerId::VoiceActorList,
            &[],
            people::VoiceActorListHandler::new
        );
        wire!(HandlerId::Actors, &[], people::ActorsHandler::new);
        wire!(HandlerId::Character, &[], people::CharacterHandler::new);

        registry
    }

    /// Resolve an id to its handler, constructing it on first use.
    pub fn resolve(&self, id: HandlerId) -> Result<Arc<dyn Handler>, HandlerError> {
        if let Some(handler) = self.resolved.get(&id) {
            return Ok(handler.clone());
        }

        let factory = self
            .factories
            .get(&id)
            .ok_or(HandlerError::Unregistered(id))?;
        for capability in factory.requires {
            capability.ensure()?;
        }

        // Entry locking makes concurrent first resolution run the factory once.
        match self.resolved.entry(id) {
            Entry::Occupied(occupied) => Ok(occupied.get().clone()),
            Entry::Vacant(vacant) => {
                let handler = (factory.build)()?;
                vacant.insert(handler.clone());
                Ok(handler)
            }
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;
    use crate::handlers::Invocation;
    use crate::http::event::ApiRequest;

    struct NoopHandler;

    #[async_trait]
    impl Handler for NoopHandler {
        async fn handle(&self, _: &ApiRequest, _: &Invocation) -> Result<Value, HandlerError> {
            Ok(json!(null))
        }
    }

    #[test]
    fn test_resolution_is_cached() {
        let builds = Arc::new(AtomicU32::new(0));
        let counter = builds.clone();

        let mut registry = HandlerRegistry::new();
        registry.register(HandlerId::TopTen, &[], move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(NoopHandler) as Arc<dyn Handler>)
        });

        let first = registry.resolve(HandlerId::TopTen).unwrap();
        let second = registry.resolve(HandlerId::TopTen).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregistered_id_is_an_error() {
        let registry = HandlerRegistry::new();
        assert!(matches!(
            registry.resolve(HandlerId::Search),
            Err(HandlerError::Unregistered(HandlerId::Search))
        ));
    }

    #[test]
    fn test_factory_failure_surfaces_as_handler_error() {
        let mut registry = HandlerRegistry::new();
        registry.register(HandlerId::Filter, &[], || {
            Err(HandlerError::msg("broken module"))
        });
        let Err(err) = registry.resolve(HandlerId::Filter) else {
            panic!("factory failure should not resolve a handler");
        };
        assert_eq!(err.to_string(), "broken module");
    }

    #[test]
    fn test_scratch_dir_capability_is_idempotent() {
        Capability::ScratchDir.ensure().unwrap();
        Capability::ScratchDir.ensure().unwrap();
        let dir = Capability::scratch_dir().unwrap();
        assert!(dir.ends_with("anime-api"));
    }
}
