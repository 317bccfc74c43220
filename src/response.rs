use serde::Serialize;

use crate::config::Environment;

/// Detail string used outside development, so internals never leak.
const GENERIC_ERROR_DETAIL: &str = "An unexpected error occurred";

/// JSON body every unhandled downstream failure is converted to:
/// `{ "message": "Internal Server Error", "error": <detail> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

impl ErrorBody {
    /// Build the 500 payload for an unhandled failure. The source detail is
    /// exposed in development and replaced with a generic string in
    /// production.
    pub fn internal(environment: Environment, detail: impl std::fmt::Display) -> Self {
        let error = if environment.is_development() {
            detail.to_string()
        } else {
            GENERIC_ERROR_DETAIL.to_string()
        };

        Self {
            message: "Internal Server Error".to_string(),
            error,
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
