//! Application records and their lifecycle states.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque chat-platform identity of a submitter.
///
/// The inner string is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(String);

impl ApplicantId {
    /// Create a new `ApplicantId` from a platform-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a persisted application document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new `RecordId` from a store-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an application.
///
/// The only permitted transitions are `Pending -> Accepted` and
/// `Pending -> Rejected`, each exactly once. Both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Returns true if the application awaits a decision.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, ApplicationStatus::Pending)
    }

    /// Returns true if the application has reached a terminal state.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !self.is_pending()
    }

    /// Store-facing string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The freeform portion of the application form.
///
/// The form has a fixed schema of five questions; the first (the requested
/// username) lives on [`Application`] itself, the remaining four here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    /// "Tell us a little bit about yourself."
    pub about: String,
    /// "What is your time zone and your age?"
    pub timezone_age: String,
    /// "How long have you been playing Minecraft?"
    pub playtime: String,
    /// "What type of playstyle are you?"
    pub playstyle: String,
}

/// One candidate's submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub applicant_id: ApplicantId,
    /// The identity to verify and whitelist. Canonical casing as returned
    /// by the identity provider.
    pub requested_name: String,
    pub answers: AnswerSet,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// Build a fresh pending application. Callers must have verified
    /// `requested_name` first; unverified submissions never reach the store.
    #[must_use]
    pub fn new(applicant_id: ApplicantId, requested_name: impl Into<String>, answers: AnswerSet) -> Self {
        Self {
            applicant_id,
            requested_name: requested_name.into(),
            answers,
            status: ApplicationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// All five question/answer pairs in form order, for rendering.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("What is your Minecraft username?", self.requested_name.as_str()),
            ("Tell us a little bit about yourself.", self.answers.about.as_str()),
            ("What is your time zone and your age?", self.answers.timezone_age.as_str()),
            ("How long have you been playing Minecraft?", self.answers.playtime.as_str()),
            ("What type of playstyle are you?", self.answers.playstyle.as_str()),
        ]
    }
}

/// An application as read back from the store, paired with its record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredApplication {
    pub id: RecordId,
    pub application: Application,
}

/// Reviewer-facing summary row from a pending listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingApplication {
    pub applicant_id: ApplicantId,
    pub requested_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> AnswerSet {
        AnswerSet {
            about: "long-time builder".into(),
            timezone_age: "UTC+1, 24".into(),
            playtime: "since beta".into(),
            playstyle: "redstone".into(),
        }
    }

    #[test]
    fn new_application_starts_pending() {
        let app = Application::new(ApplicantId::new("u-1"), "Alice", answers());
        assert!(app.status.is_pending());
        assert!(!app.status.is_decided());
    }

    #[test]
    fn status_string_round_trip() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: ApplicationStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn form_fields_preserve_question_order() {
        let app = Application::new(ApplicantId::new("u-1"), "Alice", answers());
        let fields = app.form_fields();
        assert_eq!(fields[0].1, "Alice");
        assert_eq!(fields[1].1, "long-time builder");
        assert_eq!(fields[4].0, "What type of playstyle are you?");
    }
}
