use thiserror::Error;

/// Result of checking a request origin against the configured policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    Allow(EchoOrigin),
    Deny(DenyReason),
}

impl AdmissionDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AdmissionDecision::Allow(_))
    }
}

/// Which value, if any, goes into `Access-Control-Allow-Origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoOrigin {
    /// Wildcard candidate. Downgraded to echoing the request origin when
    /// credentials are enabled; `*` and credentials never combine.
    Any,
    /// Echo the origin the request declared.
    Request,
    /// Echo one fixed configured value, whatever the request declared.
    Pinned(String),
    /// No header: the request carried no origin to answer.
    Omit,
}

/// Why an origin was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenyReason {
    #[error("origin not allowed")]
    NotAllowed,
    #[error("origin header too long ({length} bytes)")]
    OriginTooLong { length: usize },
}
