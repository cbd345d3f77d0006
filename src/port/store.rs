//! Application store port.

use async_trait::async_trait;

use crate::domain::{Application, ApplicationStatus, PendingApplication, RecordId, StoredApplication};
use crate::error::StoreError;

/// Persistence for application records.
///
/// # Implementation notes
///
/// - Implementations must be thread-safe (`Send + Sync`).
/// - `create` is not idempotent: a retried create after a timeout may
///   duplicate a record. This is an accepted limitation; the workflow
///   guards against duplicate *pending* names before writing.
/// - `list_pending` order is undefined.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Persist a new application record.
    async fn create(&self, application: &Application) -> Result<RecordId, StoreError>;

    /// List applications still awaiting a decision. Never includes
    /// accepted or rejected records.
    async fn list_pending(&self) -> Result<Vec<PendingApplication>, StoreError>;

    /// Find an application by requested name. If duplicate records match,
    /// implementations take the store's first and log the ambiguity.
    async fn find_by_name(&self, requested_name: &str) -> Result<Option<StoredApplication>, StoreError>;

    /// Find the application awaiting a decision under this name, skipping
    /// settled records left behind by earlier rejections.
    async fn find_pending_by_name(
        &self,
        requested_name: &str,
    ) -> Result<Option<StoredApplication>, StoreError>;

    /// Write a new status to an existing record.
    async fn update_status(&self, id: &RecordId, status: ApplicationStatus) -> Result<(), StoreError>;
}
