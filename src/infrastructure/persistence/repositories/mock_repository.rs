use std::sync::Mutex;

use crate::application::ports::{RepositoryError, TranscriptionRepository};
use crate::domain::TranscriptionRecord;

#[derive(Default)]
pub struct MockTranscriptionRepository {
    records: Mutex<Vec<TranscriptionRecord>>,
    fail: bool,
}

impl MockTranscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn insert_count(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn records(&self) -> Vec<TranscriptionRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl TranscriptionRepository for MockTranscriptionRepository {
    async fn insert(&self, record: &TranscriptionRecord) -> Result<(), RepositoryError> {
        if self.fail {
            return Err(RepositoryError::QueryFailed("mock repository failure".into()));
        }
        self.records
            .lock()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
            .push(record.clone());
        Ok(())
    }
}
