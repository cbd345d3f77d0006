//! Logging notifier adapter.
//!
//! Stands in for a chat-platform direct message when no presentation layer
//! is attached (CLI usage, tests): the decision notice goes to the log and
//! delivery is always "best effort succeeded".

use async_trait::async_trait;
use tracing::info;

use crate::domain::{ApplicantId, DecisionOutcome};
use crate::port::Notifier;

#[derive(Debug, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn applicant_decided(&self, applicant_id: &ApplicantId, outcome: DecisionOutcome) {
        let message = match outcome {
            DecisionOutcome::Accept => {
                "Thank you for applying! You have been accepted and added to the whitelist."
            }
            DecisionOutcome::Reject => {
                "Thank you for applying! Unfortunately, your application has been rejected."
            }
        };
        info!(applicant = %applicant_id, notice = message, "Applicant notified");
    }
}
