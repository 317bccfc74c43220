use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use origin_gate::{Environment, ErrorBody};

/// Catch-all for unhandled downstream failures: log, then answer with the
/// process-wide 500 JSON contract.
pub struct ApiError {
    environment: Environment,
    detail: String,
}

impl ApiError {
    pub fn internal(environment: Environment, detail: impl Into<String>) -> Self {
        Self {
            environment,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.detail, "unhandled failure");
        let body = ErrorBody::internal(self.environment, &self.detail);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
