//! Response classification

use super::scenario::ExpectedOutcome;

/// The classification assigned to one scenario's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The API accepted a payload the scenario expected it to reject.
    Vulnerability,
    /// The API answered 500. An internal error is never acceptable,
    /// whatever the scenario expected.
    ServerError,
    /// Expected success, got success.
    Passed,
    /// Expected a rejection and the API blocked the request.
    Blocked,
    /// Anything else; carries the raw status for manual triage.
    Unexpected(u16),
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Vulnerability => "vulnerability",
            Verdict::ServerError => "server-error",
            Verdict::Passed => "passed",
            Verdict::Blocked => "blocked",
            Verdict::Unexpected(_) => "unexpected",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a response status against the scenario's expectation.
///
/// Arms are tried in order: an accepted-but-invalid payload first, then
/// the unconditional 500 check, then the expected outcomes.
pub fn classify(expected: ExpectedOutcome, status: u16) -> Verdict {
    match (expected, status) {
        (ExpectedOutcome::Error, 200) => Verdict::Vulnerability,
        (_, 500) => Verdict::ServerError,
        (ExpectedOutcome::Success, 200) => Verdict::Passed,
        (ExpectedOutcome::Error, 400 | 422) => Verdict::Blocked,
        (_, status) => Verdict::Unexpected(status),
    }
}
