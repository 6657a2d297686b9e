use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StoragePath;

/// Keeps uploads in memory so callers can inspect what was written.
#[derive(Default)]
pub struct MockAudioStore {
    uploads: Mutex<Vec<(StoragePath, Bytes, String)>>,
    fail: bool,
}

impl MockAudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().map(|u| u.len()).unwrap_or_default()
    }

    pub fn uploads(&self) -> Vec<(StoragePath, Bytes, String)> {
        self.uploads.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl AudioStore for MockAudioStore {
    async fn upload(
        &self,
        path: &StoragePath,
        data: Bytes,
        content_type: &str,
    ) -> Result<StoragePath, AudioStoreError> {
        if self.fail {
            return Err(AudioStoreError::UploadFailed("mock store failure".into()));
        }
        let mut uploads = self
            .uploads
            .lock()
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
        uploads.push((path.clone(), data, content_type.to_string()));
        Ok(path.clone())
    }
}
