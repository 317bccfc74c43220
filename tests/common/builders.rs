#![allow(dead_code)]

use origin_gate::constants::method;
use origin_gate::{DenyBehavior, GateConfig, GateDecision, OriginGate, OriginPolicy, RequestContext};

#[derive(Default)]
pub struct GateBuilder {
    policy: Option<OriginPolicy>,
    credentials: Option<bool>,
    deny_behavior: Option<DenyBehavior>,
    preflight_status: Option<u16>,
}

impl GateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: OriginPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn allow_list<I, S>(self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy(OriginPolicy::allow_list(origins))
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn deny_behavior(mut self, behavior: DenyBehavior) -> Self {
        self.deny_behavior = Some(behavior);
        self
    }

    pub fn preflight_status(mut self, status: u16) -> Self {
        self.preflight_status = Some(status);
        self
    }

    pub fn build(self) -> OriginGate {
        let defaults = GateConfig::default();

        OriginGate::new(GateConfig {
            policy: self.policy.unwrap_or(defaults.policy),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            deny_behavior: self.deny_behavior.unwrap_or(defaults.deny_behavior),
            preflight_status: self.preflight_status.unwrap_or(defaults.preflight_status),
            allowed_methods: defaults.allowed_methods,
            allowed_headers: defaults.allowed_headers,
        })
        .expect("valid gate configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, value: impl Into<String>) -> Self {
        self.method = value.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, gate: &OriginGate) -> GateDecision {
        let SimpleRequestBuilder { method, origin } = self;
        let context = RequestContext {
            method: &method,
            origin: origin.as_deref(),
        };
        gate.evaluate(&context)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, gate: &OriginGate) -> GateDecision {
        let PreflightRequestBuilder { origin } = self;
        let context = RequestContext {
            method: method::OPTIONS,
            origin: origin.as_deref(),
        };
        gate.evaluate(&context)
    }
}

pub fn gate() -> GateBuilder {
    GateBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
