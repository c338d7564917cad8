//! Response envelope construction.
//!
//! # Responsibilities
//! - Build the three canonical response shapes (success, error, not-found)
//! - Pin the exact status codes and field names of the external contract
//!
//! # Design Decisions
//! - Pure constructors, no business logic
//! - `success` is always present and boolean; `results` only on success
//! - Non-GET and handler failures both use status 500 (existing contract,
//!   deliberately not 405)

use axum::http::StatusCode;
use serde_json::{json, Value};

/// Fully buffered response, built in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// 200 with the handler payload wrapped in the success envelope.
pub fn success(results: Value) -> ApiResponse {
    ApiResponse {
        status: StatusCode::OK,
        body: json!({ "success": true, "results": results }),
    }
}

/// 500 with the error envelope carrying the given message.
pub fn failure(message: &str) -> ApiResponse {
    ApiResponse {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: json!({ "success": false, "error": message }),
    }
}

/// 404 with the fixed not-found envelope.
pub fn not_found() -> ApiResponse {
    ApiResponse {
        status: StatusCode::NOT_FOUND,
        body: json!({ "success": false, "error": "Not Found" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let res = success(json!({ "x": 1 }));
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body, json!({ "success": true, "results": { "x": 1 } }));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let res = failure("boom");
        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.body, json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn test_not_found_envelope_shape() {
        let res = not_found();
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.body, json!({ "success": false, "error": "Not Found" }));
    }

    #[test]
    fn test_results_absent_on_failure() {
        let res = failure("boom");
        assert!(res.body.get("results").is_none());
    }
}
