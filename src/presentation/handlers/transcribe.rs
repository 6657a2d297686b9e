use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::TranscriptionOutcome;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
    pub confidence: f64,
    pub transcribed_words: Vec<String>,
}

impl From<TranscriptionOutcome> for TranscribeResponse {
    fn from(outcome: TranscriptionOutcome) -> Self {
        Self {
            transcript: outcome.transcript,
            confidence: outcome.confidence,
            transcribed_words: outcome.transcribed_words,
        }
    }
}

const FILE_FIELD: &str = "file";

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut upload = None;

    // Form fields other than the audio may precede it.
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) && field.file_name().is_none() {
            tracing::debug!(field = ?field.name(), "Skipping non-file form field");
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let declared_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await?;

        tracing::debug!(
            filename = %filename,
            declared_type = %declared_type,
            bytes = data.len(),
            "Audio upload received"
        );

        upload = Some(data);
        break;
    }

    let data = upload.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    let outcome = state.transcription_service.transcribe(data).await?;

    Ok((StatusCode::OK, Json(TranscribeResponse::from(outcome))))
}
