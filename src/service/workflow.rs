//! Application lifecycle workflow.
//!
//! Orchestrates submission, storage, and the accept/reject decision over
//! the injected ports. This is where ordering and idempotence live:
//!
//! - a record is created only after identity verification passes;
//! - no two pending applications share a requested name (enforced at
//!   write time);
//! - a decision commits exactly once, and re-invoking it is a no-op;
//! - on accept, the console grant runs *before* the status commit, so the
//!   store never records an acceptance that was not granted. A grant whose
//!   commit then fails leaves the record pending; the reviewer retries and
//!   the idempotent `whitelist add` absorbs the duplicate.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::domain::{
    AnswerSet, ApplicantId, Application, DecideResult, DecisionOutcome, PendingApplication,
    StoredApplication, SubmitResult,
};
use crate::error::StoreError;
use crate::port::{ApplicationStore, ConsoleGateway, IdentityVerifier, Notifier};

pub struct ApplicationWorkflow {
    verifier: Arc<dyn IdentityVerifier>,
    console: Arc<dyn ConsoleGateway>,
    store: Arc<dyn ApplicationStore>,
    notifier: Arc<dyn Notifier>,
    /// Per-name locks serializing concurrent operations on the same
    /// requested name. The store offers no conditional write, so the
    /// decided-exactly-once invariant is upheld here.
    name_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl ApplicationWorkflow {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        console: Arc<dyn ConsoleGateway>,
        store: Arc<dyn ApplicationStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            verifier,
            console,
            store,
            notifier,
            name_locks: Mutex::new(HashMap::new()),
        }
    }

    fn name_lock(&self, name: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.name_locks.lock();
        // Drop entries no task holds anymore so the map tracks live
        // operations, not every name ever seen.
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        Arc::clone(locks.entry(name.to_ascii_lowercase()).or_default())
    }

    /// Take in a candidate's form: verify the requested name, refuse
    /// duplicates, persist the record.
    pub async fn submit(
        &self,
        applicant_id: ApplicantId,
        requested_name: &str,
        answers: AnswerSet,
    ) -> SubmitResult {
        let Some(name) = self.verifier.canonical_name(requested_name).await else {
            info!(name = %requested_name, "Submission refused, name not recognized");
            return SubmitResult::Invalid;
        };

        let lock = self.name_lock(&name);
        let _guard = lock.lock().await;

        match self.store.find_pending_by_name(&name).await {
            Ok(Some(_)) => {
                info!(name = %name, "Submission refused, a pending application already holds this name");
                return SubmitResult::AlreadyPending;
            }
            Ok(None) => {}
            Err(e) => {
                error!(name = %name, error = %e, "Store lookup failed during submission");
                return SubmitResult::StoreFailed;
            }
        }

        let application = Application::new(applicant_id, name, answers);
        match self.store.create(&application).await {
            Ok(record_id) => {
                info!(name = %application.requested_name, record = %record_id, "Application submitted");
                SubmitResult::Submitted(record_id)
            }
            Err(e) => {
                error!(name = %application.requested_name, error = %e, "Store create failed");
                SubmitResult::StoreFailed
            }
        }
    }

    /// Commit a reviewer's verdict on the application holding
    /// `requested_name`.
    pub async fn decide(&self, requested_name: &str, outcome: DecisionOutcome) -> DecideResult {
        let lock = self.name_lock(requested_name);
        let _guard = lock.lock().await;

        // The pending record is the decision target; settled duplicates
        // left by earlier rejections must not shadow it.
        let stored = match self.store.find_pending_by_name(requested_name).await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                return match self.store.find_by_name(requested_name).await {
                    Ok(Some(settled)) => {
                        info!(
                            name = %requested_name,
                            status = %settled.application.status,
                            "Decision re-invoked on a settled application"
                        );
                        DecideResult::AlreadyDecided(settled.application.status)
                    }
                    Ok(None) => DecideResult::NotFound,
                    Err(e) => {
                        error!(name = %requested_name, error = %e, "Store lookup failed during decision");
                        DecideResult::StoreFailed
                    }
                };
            }
            Err(e) => {
                error!(name = %requested_name, error = %e, "Store lookup failed during decision");
                return DecideResult::StoreFailed;
            }
        };

        // External grant first. On accept, a failure here aborts the commit
        // so access is never recorded without being granted.
        if outcome == DecisionOutcome::Accept {
            let command = format!("whitelist add {}", stored.application.requested_name);
            match self.console.send(&command).await {
                Ok(reply) => {
                    info!(name = %stored.application.requested_name, reply = %reply, "Whitelist grant sent");
                }
                Err(e) => {
                    error!(name = %stored.application.requested_name, error = %e, "Whitelist grant failed, decision not committed");
                    return DecideResult::GatewayFailed;
                }
            }
        }

        let status = outcome.status();
        if let Err(e) = self.store.update_status(&stored.id, status).await {
            error!(
                name = %stored.application.requested_name,
                record = %stored.id,
                error = %e,
                "Status commit failed, record stays pending"
            );
            return DecideResult::StoreFailed;
        }

        // Best effort; a lost notice never reverses a committed decision.
        self.notifier
            .applicant_decided(&stored.application.applicant_id, outcome)
            .await;

        info!(name = %stored.application.requested_name, status = %status, "Application decided");
        DecideResult::Decided(status)
    }

    /// Full record lookup for reviewer display: the pending application
    /// under this name if one exists, otherwise the first settled match the
    /// store reports.
    pub async fn find_application(
        &self,
        requested_name: &str,
    ) -> Result<Option<StoredApplication>, StoreError> {
        if let Some(pending) = self.store.find_pending_by_name(requested_name).await? {
            return Ok(Some(pending));
        }
        self.store.find_by_name(requested_name).await
    }

    /// Reviewer-facing listing of applications still awaiting a decision.
    pub async fn list_pending(&self) -> Result<Vec<PendingApplication>, StoreError> {
        let pending = self.store.list_pending().await.map_err(|e| {
            warn!(error = %e, "Pending listing failed");
            e
        })?;
        Ok(pending)
    }
}
