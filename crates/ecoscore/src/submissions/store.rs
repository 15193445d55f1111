use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::SubmissionRecord;

/// Storage abstraction for scored submissions so the service can be exercised
/// against alternative backends.
///
/// Implementations must make each operation atomic with respect to the others:
/// readers never observe a partially applied append or clear.
pub trait SubmissionStore: Send + Sync {
    fn append(&self, record: SubmissionRecord) -> Result<(), StoreError>;
    /// Every stored record in insertion order. Callers sort and filter.
    fn all(&self) -> Result<Vec<SubmissionRecord>, StoreError>;
    /// Drops every record, returning how many were discarded.
    fn clear(&self) -> Result<usize, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("submission store unavailable: {0}")]
    Unavailable(String),
}

/// Unbounded process-local store. Contents are lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct InMemorySubmissionStore {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl InMemorySubmissionStore {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<SubmissionRecord>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("submission mutex poisoned".to_string()))
    }
}

impl SubmissionStore for InMemorySubmissionStore {
    fn append(&self, record: SubmissionRecord) -> Result<(), StoreError> {
        self.lock()?.push(record);
        Ok(())
    }

    fn all(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn clear(&self) -> Result<usize, StoreError> {
        let drained = std::mem::take(&mut *self.lock()?);
        Ok(drained.len())
    }
}
