use diktat::application::ports::AudioStoreError;
use diktat::infrastructure::storage::AudioStoreFactory;
use diktat::presentation::config::{StorageProviderSetting, StorageSettings};

fn settings(provider: StorageProviderSetting, local_path: String) -> StorageSettings {
    StorageSettings {
        provider,
        local_path,
        bucket: None,
        azure_account: None,
        azure_access_key: None,
        gcs_service_account_path: None,
        object_prefix: "audio".to_string(),
        timeout_secs: 5,
    }
}

#[test]
fn given_local_provider_when_creating_store_then_succeeds() {
    let dir = tempfile::TempDir::new().unwrap();
    let settings = settings(
        StorageProviderSetting::Local,
        dir.path().to_string_lossy().into_owned(),
    );

    assert!(AudioStoreFactory::create(&settings).is_ok());
}

#[test]
fn given_azure_provider_without_credentials_when_creating_store_then_configuration_error() {
    let settings = settings(StorageProviderSetting::Azure, String::new());

    let result = AudioStoreFactory::create(&settings);

    assert!(matches!(result, Err(AudioStoreError::Configuration(_))));
}

#[test]
fn given_gcs_provider_without_bucket_when_creating_store_then_configuration_error() {
    let settings = settings(StorageProviderSetting::Gcs, String::new());

    let result = AudioStoreFactory::create(&settings);

    assert!(matches!(result, Err(AudioStoreError::Configuration(_))));
}
