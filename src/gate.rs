use crate::config::{ConfigError, DenyBehavior, GateConfig};
use crate::context::RequestContext;
use crate::decision::{AdmissionDecision, DenyReason};
use crate::header_builder::{EmittedOrigin, HeaderBuilder};
use crate::headers::{HeaderCollection, Headers};

/// Headers and response metadata for one evaluated request.
#[derive(Debug, Clone)]
pub struct GateResponse {
    pub headers: Headers,
    /// Status the caller must answer with. Set for preflight only.
    pub status: Option<u16>,
    /// When true the request stops here and never reaches route handlers.
    pub halt: bool,
}

/// Overall decision for one request.
#[derive(Debug, Clone)]
pub enum GateDecision {
    /// `OPTIONS` probe: answer immediately with the given status and headers
    /// and an empty body.
    Preflight(GateResponse),
    /// Ordinary request: attach the headers and forward downstream.
    Simple(GateResponse),
    /// Denied under [`DenyBehavior::Reject`]: fail the request before any
    /// route handler runs.
    Denied(DenyReason),
    /// Non-CORS traffic; nothing to attach, nothing to block.
    NotApplicable,
}

/// Origin admission engine. Holds only immutable configuration after
/// construction; safe to share across any number of concurrent request
/// handlers without locking.
#[derive(Debug)]
pub struct OriginGate {
    config: GateConfig,
}

impl OriginGate {
    pub fn new(config: GateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> GateDecision {
        let admission = self.config.policy.admit(request.origin);

        if request.is_preflight() {
            self.evaluate_preflight(request, admission)
        } else {
            self.evaluate_simple(request, admission)
        }
    }

    /// Preflight short-circuits unconditionally: whatever the admission
    /// outcome, the response is produced here and downstream handlers are
    /// never consulted.
    fn evaluate_preflight(
        &self,
        request: &RequestContext<'_>,
        admission: AdmissionDecision,
    ) -> GateDecision {
        let builder = HeaderBuilder::new(&self.config);
        let mut headers = HeaderCollection::new();

        match admission {
            AdmissionDecision::Allow(echo) => {
                let EmittedOrigin {
                    headers: origin_headers,
                    echoed,
                } = builder.origin_headers(&echo, request);
                headers.extend(origin_headers);
                if echoed {
                    headers.extend(builder.credentials_header());
                }
            }
            AdmissionDecision::Deny(reason) => {
                if self.config.deny_behavior == DenyBehavior::Reject {
                    return GateDecision::Denied(reason);
                }
                headers.extend(builder.vary_origin_header());
            }
        }

        headers.extend(builder.methods_header());
        headers.extend(builder.allowed_headers_header());

        GateDecision::Preflight(GateResponse {
            headers: headers.into_headers(),
            status: Some(self.config.preflight_status),
            halt: true,
        })
    }

    fn evaluate_simple(
        &self,
        request: &RequestContext<'_>,
        admission: AdmissionDecision,
    ) -> GateDecision {
        let builder = HeaderBuilder::new(&self.config);

        match admission {
            AdmissionDecision::Allow(echo) => {
                let EmittedOrigin {
                    headers: mut collected,
                    echoed,
                } = builder.origin_headers(&echo, request);

                if !echoed {
                    return GateDecision::NotApplicable;
                }

                collected.extend(builder.credentials_header());
                GateDecision::Simple(GateResponse {
                    headers: collected.into_headers(),
                    status: None,
                    halt: false,
                })
            }
            AdmissionDecision::Deny(reason) => match self.config.deny_behavior {
                DenyBehavior::Reject => GateDecision::Denied(reason),
                DenyBehavior::OmitHeaders => {
                    let mut collected = HeaderCollection::new();
                    collected.extend(builder.vary_origin_header());
                    GateDecision::Simple(GateResponse {
                        headers: collected.into_headers(),
                        status: None,
                        halt: false,
                    })
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
