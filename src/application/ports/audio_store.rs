use bytes::Bytes;

use crate::domain::StoragePath;

/// Object storage holding the original uploaded recordings.
#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    /// Writes the whole object and returns the name it was committed under.
    async fn upload(
        &self,
        path: &StoragePath,
        data: Bytes,
        content_type: &str,
    ) -> Result<StoragePath, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("store configuration invalid: {0}")]
    Configuration(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
