use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::admission::AppState;
use crate::error::ApiError;

// Stand-ins for the real route groups. The admission filter only guarantees
// they are reached after an origin is admitted.

pub async fn login() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn profile() -> Json<Value> {
    Json(json!({ "user": "demo" }))
}

pub async fn checkout(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    // The payment processor is an external collaborator; with none wired in,
    // the failure surfaces through the 500 contract.
    Err(ApiError::internal(
        state.environment,
        "payment provider unreachable",
    ))
}

pub async fn quote() -> Json<Value> {
    Json(json!({ "carrier": "standard", "days": 3 }))
}
