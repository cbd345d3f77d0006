use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{
    Application, ApplicationStatus, PendingApplication, RecordId, StoredApplication,
};
use crate::error::StoreError;
use crate::port::ApplicationStore;

/// In-memory application store with failure injection.
///
/// `find_by_name` returns the oldest matching record, the same "first
/// document wins" behavior the real store exhibits on duplicates.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StoredApplication>>,
    next_id: AtomicUsize,
    create_calls: AtomicUsize,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
    fail_find: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create` fail.
    pub fn fail_next_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    /// Make the next `update_status` fail.
    pub fn fail_next_update(&self) {
        self.fail_update.store(true, Ordering::SeqCst);
    }

    /// Make the next `find_by_name` fail.
    pub fn fail_next_find(&self) {
        self.fail_find.store(true, Ordering::SeqCst);
    }

    /// How many times `create` was invoked, including failed attempts.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of stored records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.lock().len()
    }

    /// Direct lookup for assertions, oldest match first.
    #[must_use]
    pub fn find(&self, requested_name: &str) -> Option<StoredApplication> {
        self.records
            .lock()
            .iter()
            .find(|stored| stored.application.requested_name == requested_name)
            .cloned()
    }

    fn injected_failure(flag: &AtomicBool) -> Option<StoreError> {
        flag.swap(false, Ordering::SeqCst).then(|| StoreError::Rejected {
            status: 503,
            body: "injected failure".to_string(),
        })
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn create(&self, application: &Application) -> Result<RecordId, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = Self::injected_failure(&self.fail_create) {
            return Err(err);
        }

        let id = RecordId::new(format!("rec-{}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        self.records.lock().push(StoredApplication {
            id: id.clone(),
            application: application.clone(),
        });
        Ok(id)
    }

    async fn list_pending(&self) -> Result<Vec<PendingApplication>, StoreError> {
        Ok(self
            .records
            .lock()
            .iter()
            .filter(|stored| stored.application.status.is_pending())
            .map(|stored| PendingApplication {
                applicant_id: stored.application.applicant_id.clone(),
                requested_name: stored.application.requested_name.clone(),
            })
            .collect())
    }

    async fn find_by_name(
        &self,
        requested_name: &str,
    ) -> Result<Option<StoredApplication>, StoreError> {
        if let Some(err) = Self::injected_failure(&self.fail_find) {
            return Err(err);
        }
        Ok(self.find(requested_name))
    }

    async fn find_pending_by_name(
        &self,
        requested_name: &str,
    ) -> Result<Option<StoredApplication>, StoreError> {
        if let Some(err) = Self::injected_failure(&self.fail_find) {
            return Err(err);
        }
        Ok(self
            .records
            .lock()
            .iter()
            .find(|stored| {
                stored.application.requested_name == requested_name
                    && stored.application.status.is_pending()
            })
            .cloned())
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: ApplicationStatus,
    ) -> Result<(), StoreError> {
        if let Some(err) = Self::injected_failure(&self.fail_update) {
            return Err(err);
        }

        let mut records = self.records.lock();
        let stored = records
            .iter_mut()
            .find(|stored| &stored.id == id)
            .ok_or_else(|| StoreError::Rejected {
                status: 404,
                body: format!("no record {id}"),
            })?;
        stored.application.status = status;
        Ok(())
    }
}
