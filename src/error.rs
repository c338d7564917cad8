//! Failure currency for the handler boundary.
//!
//! # Responsibilities
//! - Represent every way a content handler can fail
//! - Carry a human-readable message for the error envelope
//!
//! # Design Decisions
//! - One enum crosses the boundary; the dispatcher never inspects variants,
//!   only the Display text
//! - Registry/resolution failures share the type so the envelope cannot
//!   distinguish them from handler-logic failures

use crate::handlers::HandlerId;

/// Error raised during handler resolution or execution.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Upstream request failed at the transport level.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// A handler needed a parameter the request did not carry.
    #[error("missing required parameter \"{0}\"")]
    MissingParam(&'static str),

    /// No factory is registered for the requested handler.
    #[error("no handler registered for {0}")]
    Unregistered(HandlerId),

    /// A required environment capability could not be established.
    #[error("environment capability unavailable: {0}")]
    Capability(String),

    /// Free-form failure with a caller-supplied message.
    #[error("{0}")]
    Message(String),
}

impl HandlerError {
    /// Build a free-form failure from any displayable message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
