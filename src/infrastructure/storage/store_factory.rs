use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::object_audio_store::ObjectAudioStore;

pub struct AudioStoreFactory;

impl AudioStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn AudioStore>, AudioStoreError> {
        let store = match settings.provider {
            StorageProviderSetting::Local => {
                ObjectAudioStore::local(PathBuf::from(&settings.local_path))?
            }
            StorageProviderSetting::Azure => {
                let account = required(settings.azure_account.as_deref(), "azure_account")?;
                let key = required(settings.azure_access_key.as_deref(), "azure_access_key")?;
                let container = required(settings.bucket.as_deref(), "bucket")?;
                ObjectAudioStore::azure(account, key, container)?
            }
            StorageProviderSetting::Gcs => {
                let bucket = required(settings.bucket.as_deref(), "bucket")?;
                let credentials = required(
                    settings.gcs_service_account_path.as_deref(),
                    "gcs_service_account_path",
                )?;
                ObjectAudioStore::gcs(bucket, credentials)?
            }
        };

        tracing::info!(backend = store.backend(), "Audio store configured");
        Ok(Arc::new(store))
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, AudioStoreError> {
    value.ok_or_else(|| AudioStoreError::Configuration(format!("storage.{} required", name)))
}
