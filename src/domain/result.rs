//! Typed outcomes of workflow operations.
//!
//! These are results in the domain sense, not errors: a rejected submission
//! or an already-decided application is a normal, expected answer.

use super::{ApplicationStatus, RecordId};

/// The reviewer's verdict on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    Accept,
    Reject,
}

impl DecisionOutcome {
    /// The terminal status this outcome commits.
    #[must_use]
    pub fn status(&self) -> ApplicationStatus {
        match self {
            DecisionOutcome::Accept => ApplicationStatus::Accepted,
            DecisionOutcome::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Verified and persisted; reviewers should be prompted out-of-band.
    Submitted(RecordId),
    /// The identity provider does not recognize the requested name.
    Invalid,
    /// A pending application already holds this name.
    AlreadyPending,
    /// The store rejected or failed the create; the submitter may retry.
    StoreFailed,
}

impl SubmitResult {
    /// Returns true if a record was created.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitResult::Submitted(_))
    }
}

/// Result of a decision attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecideResult {
    /// The decision was committed to the store.
    Decided(ApplicationStatus),
    /// No application with that name exists.
    NotFound,
    /// The application already reached a terminal state; no side effects
    /// were repeated.
    AlreadyDecided(ApplicationStatus),
    /// The console grant failed; the record stays pending for a retry.
    GatewayFailed,
    /// The store write failed; the record stays pending for a retry.
    StoreFailed,
}

impl DecideResult {
    /// Returns true if the decision was committed.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        matches!(self, DecideResult::Decided(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_maps_to_terminal_status() {
        assert_eq!(DecisionOutcome::Accept.status(), ApplicationStatus::Accepted);
        assert_eq!(DecisionOutcome::Reject.status(), ApplicationStatus::Rejected);
        assert!(DecisionOutcome::Accept.status().is_decided());
    }

    #[test]
    fn result_helpers() {
        assert!(SubmitResult::Submitted(RecordId::new("r-1")).is_submitted());
        assert!(!SubmitResult::Invalid.is_submitted());
        assert!(DecideResult::Decided(ApplicationStatus::Accepted).is_decided());
        assert!(!DecideResult::AlreadyDecided(ApplicationStatus::Rejected).is_decided());
    }
}
