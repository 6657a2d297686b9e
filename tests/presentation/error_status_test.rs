use axum::http::StatusCode;
use diktat::application::ports::{AudioStoreError, RecognizerError, RepositoryError};
use diktat::application::services::{Collaborator, TranscriptionServiceError};
use diktat::domain::AudioFormat;
use diktat::presentation::handlers::status_for;

#[test]
fn given_non_wav_payload_when_mapping_status_then_unsupported_media_type() {
    let err = TranscriptionServiceError::UnsupportedMediaType(AudioFormat::Mp3);

    assert_eq!(status_for(&err), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[test]
fn given_recognizer_failures_when_mapping_status_then_bad_gateway() {
    let failed = TranscriptionServiceError::Recognizer(RecognizerError::ApiRequestFailed(
        "status 500".into(),
    ));

    assert_eq!(status_for(&failed), StatusCode::BAD_GATEWAY);
    assert_eq!(
        status_for(&TranscriptionServiceError::NoTranscriptionResult),
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn given_storage_or_database_failure_when_mapping_status_then_internal_server_error() {
    let storage =
        TranscriptionServiceError::Storage(AudioStoreError::UploadFailed("bucket gone".into()));
    let database =
        TranscriptionServiceError::Database(RepositoryError::QueryFailed("constraint".into()));

    assert_eq!(status_for(&storage), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(status_for(&database), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn given_any_collaborator_timeout_when_mapping_status_then_gateway_timeout() {
    for collaborator in [
        Collaborator::Recognizer,
        Collaborator::Storage,
        Collaborator::Database,
    ] {
        let err = TranscriptionServiceError::Timeout(collaborator);

        assert_eq!(status_for(&err), StatusCode::GATEWAY_TIMEOUT);
    }
}
