use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use tracing::instrument;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StoragePath;

/// [`AudioStore`] backed by any `object_store` implementation.
pub struct ObjectAudioStore {
    inner: Arc<dyn ObjectStore>,
    backend: &'static str,
    // The local filesystem backend rejects object attributes.
    supports_attributes: bool,
}

impl ObjectAudioStore {
    pub fn local(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            backend: "local",
            supports_attributes: false,
        })
    }

    pub fn azure(account: &str, access_key: &str, container: &str) -> Result<Self, AudioStoreError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| AudioStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
            backend: "azure",
            supports_attributes: true,
        })
    }

    pub fn gcs(bucket: &str, service_account_path: &str) -> Result<Self, AudioStoreError> {
        let store = GoogleCloudStorageBuilder::new()
            .with_bucket_name(bucket)
            .with_service_account_path(service_account_path)
            .build()
            .map_err(|e| AudioStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
            backend: "gcs",
            supports_attributes: true,
        })
    }

    pub fn backend(&self) -> &'static str {
        self.backend
    }
}

#[async_trait::async_trait]
impl AudioStore for ObjectAudioStore {
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    async fn upload(
        &self,
        path: &StoragePath,
        data: Bytes,
        content_type: &str,
    ) -> Result<StoragePath, AudioStoreError> {
        let store_path = StorePath::from(path.as_str());

        let mut attributes = Attributes::new();
        if self.supports_attributes {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&store_path, PutPayload::from(data), options)
            .await
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(object_name = %store_path, "Audio uploaded");

        Ok(StoragePath::from_raw(store_path.to_string()))
    }
}
