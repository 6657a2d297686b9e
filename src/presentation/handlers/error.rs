use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::TranscriptionServiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Multipart(MultipartError),
    Transcription(TranscriptionServiceError),
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::Multipart(err)
    }
}

impl From<TranscriptionServiceError> for ApiError {
    fn from(err: TranscriptionServiceError) -> Self {
        Self::Transcription(err)
    }
}

pub fn status_for(err: &TranscriptionServiceError) -> StatusCode {
    match err {
        TranscriptionServiceError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        TranscriptionServiceError::NoTranscriptionResult
        | TranscriptionServiceError::Recognizer(_) => StatusCode::BAD_GATEWAY,
        TranscriptionServiceError::Storage(_) | TranscriptionServiceError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        TranscriptionServiceError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected malformed request");
                (StatusCode::BAD_REQUEST, msg)
            }
            // Carries its own status, e.g. 413 once the body limit is hit.
            ApiError::Multipart(err) => {
                let status = err.status();
                tracing::warn!(status = %status, error = %err.body_text(), "Rejected multipart upload");
                (status, err.body_text())
            }
            ApiError::Transcription(err) => {
                let status = status_for(&err);
                match err.collaborator() {
                    Some(collaborator) if status.is_server_error() => tracing::error!(
                        collaborator = %collaborator,
                        retryable = err.is_retryable(),
                        error = %err,
                        "Transcription failed"
                    ),
                    _ => tracing::warn!(error = %err, "Transcription rejected"),
                }
                (status, err.to_string())
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
