//! Platform-agnostic domain types.

mod application;
mod result;

pub use application::{
    AnswerSet, Application, ApplicantId, ApplicationStatus, PendingApplication, RecordId,
    StoredApplication,
};
pub use result::{DecideResult, DecisionOutcome, SubmitResult};
