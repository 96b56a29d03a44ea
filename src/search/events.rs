//! Search progress events, outcomes, and the caller-facing report.

use serde::Serialize;

/// One checked domain in the caller-facing result shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    /// Bare candidate token (no TLD).
    pub domain: String,
    /// Whether the name can be registered.
    pub available: bool,
}

/// Terminal outcome of a search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The required number of available names was found.
    Found,
    /// Bounds were hit with some, but fewer than required, available names.
    Partial,
    /// Bounds were hit with zero available names. Not an error; the caller
    /// should prompt for a better description.
    NoResults,
    /// The search was cancelled cooperatively.
    Cancelled,
    /// Terminal failure: generation failed, or a provider rejected its
    /// credentials and no other provider could answer.
    Failed(String),
}

/// Progress events emitted to the caller during a search.
///
/// Event order encodes the session state machine: `Generating` marks a
/// generation round, `DomainChecking`/`DomainResolved` mark the checking
/// phase, and `Completed` is terminal; nothing follows it.
///
/// Domains in events are fully qualified (`fittrack.com`), ready for
/// display; the final report keys entries by the bare token instead.
#[derive(Debug, Clone)]
pub enum SearchUpdate {
    /// A generation round started (1-based attempt number).
    Generating { attempt: usize },
    /// A new candidate entered the checking phase.
    DomainChecking { domain: String },
    /// A staged verdict reveal for one candidate.
    DomainResolved {
        domain: String,
        available: bool,
        /// True when the verdict is a fail-closed default, not a provider
        /// answer.
        provider_failed: bool,
    },
    /// Terminal event carrying the outcome and the final report.
    Completed {
        outcome: SearchOutcome,
        report: SearchReport,
    },
}

/// Caller-facing result shape: one entry per unique candidate checked in
/// the session. `error` is set only when `success` is false; partial
/// results accumulated before a failure are preserved either way.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// False only for terminal failures; hitting a bound is not a failure.
    pub success: bool,
    /// Verdicts in processing order, bare candidate tokens (no TLD).
    pub results: Vec<DomainResult>,
    /// Human-readable failure message, set only when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization_omits_absent_error() {
        let report = SearchReport {
            success: true,
            results: vec![DomainResult {
                domain: "fittrack".into(),
                available: false,
            }],
            error: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("error"));
        assert!(json.contains(r#""domain":"fittrack""#));
    }

    #[test]
    fn test_report_serialization_includes_error_on_failure() {
        let report = SearchReport {
            success: false,
            results: Vec::new(),
            error: Some("name generation failed".into()),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""success":false"#));
        assert!(json.contains("name generation failed"));
    }
}
