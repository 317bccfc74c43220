use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use origin_gate::constants::header;
use origin_gate::{
    AppConfig, ConfigError, Environment, GateDecision, Headers, OriginGate, RequestContext,
};

pub type SharedGate = Arc<OriginGate>;

#[derive(Clone)]
pub struct AppState {
    pub gate: SharedGate,
    pub environment: Environment,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            gate: Arc::new(OriginGate::new(config.gate.clone())?),
            environment: config.environment,
        })
    }
}

/// Runs ahead of every route, matched or not: preflight probes are answered
/// here, admitted requests pick up their CORS headers on the way out, and
/// rejected ones stop before any handler.
pub async fn admission_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().as_str().to_owned();
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let context = RequestContext {
        method: &method,
        origin: origin.as_deref(),
    };

    match state.gate.evaluate(&context) {
        GateDecision::Preflight(gate_response) => {
            let status = gate_response
                .status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::OK);
            let mut response = status.into_response();
            apply_headers(response.headers_mut(), &gate_response.headers);
            response
        }
        GateDecision::Simple(gate_response) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &gate_response.headers);
            response
        }
        GateDecision::Denied(reason) => {
            tracing::warn!(%reason, origin = origin.as_deref(), "request origin denied");
            (StatusCode::FORBIDDEN, reason.to_string()).into_response()
        }
        GateDecision::NotApplicable => next.run(request).await,
    }
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(name, value);
        }
    }
}
