//! Event dispatch for hosting gateways.
//!
//! A chat gateway (or any other presentation layer) delivers interaction
//! events as plain values; this table maps each event kind onto the
//! matching workflow operation. The gateway stays an external collaborator
//! invoking this entry point, never part of the core.

use crate::domain::{AnswerSet, ApplicantId, DecideResult, DecisionOutcome, SubmitResult};
use crate::service::ApplicationWorkflow;

/// One interaction delivered by the hosting gateway.
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    Submit {
        applicant_id: ApplicantId,
        requested_name: String,
        answers: AnswerSet,
    },
    Decide {
        requested_name: String,
        outcome: DecisionOutcome,
    },
}

/// The workflow's answer, for the gateway to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Submitted(SubmitResult),
    Decided(DecideResult),
}

impl ApplicationWorkflow {
    /// Route one gateway event to its workflow operation.
    pub async fn dispatch(&self, event: GatewayEvent) -> EventOutcome {
        match event {
            GatewayEvent::Submit {
                applicant_id,
                requested_name,
                answers,
            } => EventOutcome::Submitted(self.submit(applicant_id, &requested_name, answers).await),
            GatewayEvent::Decide {
                requested_name,
                outcome,
            } => EventOutcome::Decided(self.decide(&requested_name, outcome).await),
        }
    }
}
