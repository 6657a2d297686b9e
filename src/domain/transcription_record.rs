use chrono::{DateTime, Utc};

use super::StoragePath;

/// Row written to the transcription log after a successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRecord {
    pub audio_object: StoragePath,
    pub transcript: String,
    pub uploaded_at: DateTime<Utc>,
}

impl TranscriptionRecord {
    pub fn new(audio_object: StoragePath, transcript: String, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            audio_object,
            transcript,
            uploaded_at,
        }
    }
}
