#![allow(dead_code)]

use origin_gate::{DenyReason, GateDecision, Headers};

pub fn assert_simple(decision: GateDecision) -> Headers {
    match decision {
        GateDecision::Simple(response) => response.headers,
        other => panic!("expected simple decision, got {other:?}"),
    }
}

pub fn assert_preflight(decision: GateDecision) -> (Headers, u16, bool) {
    match decision {
        GateDecision::Preflight(response) => (
            response.headers,
            response.status.expect("preflight carries a status"),
            response.halt,
        ),
        other => panic!("expected preflight decision, got {other:?}"),
    }
}

pub fn assert_denied(decision: GateDecision) -> DenyReason {
    match decision {
        GateDecision::Denied(reason) => reason,
        other => panic!("expected denied decision, got {other:?}"),
    }
}

pub fn assert_not_applicable(decision: GateDecision) {
    assert!(
        matches!(decision, GateDecision::NotApplicable),
        "expected not-applicable decision"
    );
}
