use indexmap::IndexSet;

use crate::decision::{AdmissionDecision, DenyReason, EchoOrigin};
use crate::util::{equals_ignore_case, normalize_origin};

/// Hard cap on origin values worth comparing. A legitimate scheme+host+port
/// tuple never comes close; anything longer is refused outright.
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Admission policy for cross-origin requests. Constructed once at startup
/// and immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Every origin is permitted.
    AllowAll,
    /// Only the listed origins are permitted. Requests without an `Origin`
    /// header (same-origin pages, server-to-server callers) pass through
    /// untouched, since browser CORS does not apply to them.
    AllowList(IndexSet<String>),
    /// One fixed origin is echoed on every response regardless of what the
    /// request declared. A permissive degenerate mode: it answers with a
    /// constant, it does not validate the caller.
    SinglePinned(String),
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self::AllowAll
    }
}

impl OriginPolicy {
    pub fn allow_all() -> Self {
        Self::AllowAll
    }

    /// Build an allow-list. Entries are trimmed, stripped of trailing
    /// slashes, and deduplicated case-insensitively; the first spelling wins.
    pub fn allow_list<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for origin in origins {
            let origin = origin.into();
            let normalized = normalize_origin(&origin);
            if !set
                .iter()
                .any(|existing: &String| equals_ignore_case(existing, normalized))
            {
                set.insert(normalized.to_string());
            }
        }
        Self::AllowList(set)
    }

    pub fn pinned<S: Into<String>>(origin: S) -> Self {
        let origin = origin.into();
        Self::SinglePinned(normalize_origin(&origin).to_string())
    }

    /// Evaluate a request origin. Pure and deterministic: the same
    /// `(origin, policy)` pair always yields the same decision.
    pub fn admit(&self, origin: Option<&str>) -> AdmissionDecision {
        if let Some(value) = origin
            && value.len() > MAX_ORIGIN_LENGTH
        {
            return AdmissionDecision::Deny(DenyReason::OriginTooLong {
                length: value.len(),
            });
        }

        match self {
            OriginPolicy::AllowAll => match origin {
                Some(_) => AdmissionDecision::Allow(EchoOrigin::Any),
                None => AdmissionDecision::Allow(EchoOrigin::Omit),
            },
            OriginPolicy::AllowList(allowed) => match origin {
                Some(value) => {
                    let candidate = value.trim();
                    if allowed
                        .iter()
                        .any(|entry| equals_ignore_case(entry, candidate))
                    {
                        AdmissionDecision::Allow(EchoOrigin::Request)
                    } else {
                        AdmissionDecision::Deny(DenyReason::NotAllowed)
                    }
                }
                None => AdmissionDecision::Allow(EchoOrigin::Omit),
            },
            OriginPolicy::SinglePinned(pinned) => {
                AdmissionDecision::Allow(EchoOrigin::Pinned(pinned.clone()))
            }
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
