//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! InboundEvent
//!     → dispatcher.rs (method guard, table lookup, envelope construction)
//!     → registry.rs (lazy resolve-once handler lookup, capability checks)
//!     → handler executes (single suspension point)
//!     → success / error envelope
//! ```
//!
//! # Design Decisions
//! - The dispatcher is the single recovery boundary: every failure below it
//!   becomes the 500 error envelope, nothing is retried
//! - Handlers are constructed on first use, never at startup (cold-start
//!   cost is paid only by routes that actually run)

pub mod dispatcher;
pub mod registry;

pub use dispatcher::Dispatcher;
pub use registry::{Capability, HandlerRegistry};
