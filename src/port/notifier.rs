//! Applicant notification port.

use async_trait::async_trait;

use crate::domain::{ApplicantId, DecisionOutcome};

/// Best-effort notification back to the applicant.
///
/// Failure to deliver never rolls back a decision, so the trait is
/// infallible; implementations log delivery problems and move on.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell the applicant their application was decided.
    async fn applicant_decided(&self, applicant_id: &ApplicantId, outcome: DecisionOutcome);
}
