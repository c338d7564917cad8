//! HTTP boundary subsystem.
//!
//! # Data Flow
//! ```text
//! Transport request
//!     → server.rs (Axum catch-all, request ID, middleware)
//!     → event.rs (InboundEvent → ApiRequest normalization)
//!     → [dispatch layer selects and runs a handler]
//!     → response.rs (success / error / not-found envelope)
//!     → Send to client as application/json
//! ```

pub mod event;
pub mod response;
pub mod server;

pub use event::{ApiRequest, InboundEvent};
pub use response::ApiResponse;
pub use server::HttpServer;
