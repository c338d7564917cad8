//! Request dispatch.
//!
//! # Responsibilities
//! - Guard the method (GET only, per the existing contract)
//! - Select the first matching route and derive the handler's inputs
//! - Await the handler and translate its outcome into an envelope
//!
//! # Design Decisions
//! - Single recovery boundary: every failure below dispatch becomes the 500
//!   envelope with the failure's message ("Internal error" when empty)
//! - Non-GET answers 500, not 405; downstream callers depend on it
//! - No timeout or cancellation here; a hung handler is a platform concern

use crate::http::event::{ApiRequest, InboundEvent};
use crate::http::response::{self, ApiResponse};
use crate::routing::RouteTable;

use super::registry::HandlerRegistry;

/// Fixed message for rejected methods, part of the external contract.
const METHOD_GUARD_MESSAGE: &str = "Only GET supported";

/// Fallback message when a failure carries no text.
const GENERIC_ERROR_MESSAGE: &str = "Internal error";

/// Evaluates the route table and runs one handler per inbound event.
pub struct Dispatcher {
    table: RouteTable,
    registry: HandlerRegistry,
}

impl Dispatcher {
    pub fn new(table: RouteTable, registry: HandlerRegistry) -> Self {
        Self { table, registry }
    }

    /// Run one event to completion and produce the transport response.
    pub async fn dispatch(&self, event: InboundEvent) -> ApiResponse {
        if event.method != "GET" {
            tracing::warn!(method = %event.method, path = %event.path, "Rejected non-GET request");
            return response::failure(METHOD_GUARD_MESSAGE);
        }

        let matched = match self.table.resolve(&event.path) {
            Ok(Some(matched)) => matched,
            Ok(None) => {
                tracing::debug!(path = %event.path, "No route matched");
                return response::not_found();
            }
            Err(decode_err) => {
                tracing::warn!(path = %event.path, error = %decode_err, "Path decode failed");
                return failure_from(&decode_err.to_string());
            }
        };

        tracing::debug!(
            path = %event.path,
            handler = %matched.handler,
            "Route matched"
        );

        let handler = match self.registry.resolve(matched.handler) {
            Ok(handler) => handler,
            Err(e) => {
                tracing::error!(handler = %matched.handler, error = %e, "Handler resolution failed");
                return failure_from(&e.to_string());
            }
        };

        let request = ApiRequest::from_event(event, matched.params);
        match handler.handle(&request, &matched.invocation).await {
            Ok(payload) => response::success(payload),
            Err(e) => {
                tracing::error!(
                    handler = %matched.handler,
                    path = %request.path,
                    error = %e,
                    "Handler failed"
                );
                failure_from(&e.to_string())
            }
        }
    }

    /// Category names the table was built with.
    pub fn categories(&self) -> &[String] {
        self.table.categories()
    }
}

fn failure_from(message: &str) -> ApiResponse {
    if message.is_empty() {
        response::failure(GENERIC_ERROR_MESSAGE)
    } else {
        response::failure(message)
    }
}
