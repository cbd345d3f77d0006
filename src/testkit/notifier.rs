use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{ApplicantId, DecisionOutcome};
use crate::port::Notifier;

/// Notifier that captures every applicant notice for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(ApplicantId, DecisionOutcome)>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices delivered so far, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<(ApplicantId, DecisionOutcome)> {
        self.notices.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn applicant_decided(&self, applicant_id: &ApplicantId, outcome: DecisionOutcome) {
        self.notices.lock().push((applicant_id.clone(), outcome));
    }
}
