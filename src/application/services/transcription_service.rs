use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::Utc;
use tracing::instrument;

use crate::application::ports::{
    AudioStore, AudioStoreError, RecognizerError, RepositoryError, SpeechRecognizer,
    TranscriptionRepository,
};
use crate::domain::{
    AudioFormat, RecognitionConfig, StoragePath, TranscriptNormalizer, TranscriptionRecord,
};

/// Operator settings the service is built with. Read once at startup.
#[derive(Debug, Clone)]
pub struct TranscriptionOptions {
    pub locale: String,
    pub vocabulary_hints: Vec<String>,
    pub object_prefix: String,
    pub recognizer_timeout: Duration,
    pub storage_timeout: Duration,
    pub database_timeout: Duration,
}

/// Validates, recognizes, normalizes and archives a single upload.
pub struct TranscriptionService {
    recognizer: Arc<dyn SpeechRecognizer>,
    audio_store: Arc<dyn AudioStore>,
    repository: Arc<dyn TranscriptionRepository>,
    normalizer: TranscriptNormalizer,
    options: TranscriptionOptions,
}

impl TranscriptionService {
    pub fn new(
        recognizer: Arc<dyn SpeechRecognizer>,
        audio_store: Arc<dyn AudioStore>,
        repository: Arc<dyn TranscriptionRepository>,
        options: TranscriptionOptions,
    ) -> Self {
        Self {
            recognizer,
            audio_store,
            repository,
            normalizer: TranscriptNormalizer::for_locale(&options.locale),
            options,
        }
    }

    pub fn recognition_config(&self) -> RecognitionConfig {
        RecognitionConfig::build(&self.options.locale, &self.options.vocabulary_hints)
    }

    #[instrument(skip(self, audio), fields(bytes = audio.len()))]
    pub async fn transcribe(
        &self,
        audio: Bytes,
    ) -> Result<TranscriptionOutcome, TranscriptionServiceError> {
        let format = AudioFormat::sniff(&audio);
        if format != AudioFormat::Wav {
            tracing::warn!(detected = %format, "Rejecting non-WAV upload");
            return Err(TranscriptionServiceError::UnsupportedMediaType(format));
        }

        let config = self.recognition_config();

        let response = bounded(
            Collaborator::Recognizer,
            self.options.recognizer_timeout,
            self.recognizer.recognize(&audio, &config),
        )
        .await?;

        let best = response
            .best_alternative()
            .ok_or(TranscriptionServiceError::NoTranscriptionResult)?;

        let transcript = best.transcript.clone();
        let confidence = best.confidence;
        let transcribed_words = self.normalizer.normalize(&best.word_tokens());

        tracing::debug!(
            confidence,
            words = transcribed_words.len(),
            "Recognition completed"
        );

        let uploaded_at = Utc::now();
        let path = StoragePath::for_upload(&self.options.object_prefix, uploaded_at);

        let object_name = bounded(
            Collaborator::Storage,
            self.options.storage_timeout,
            self.audio_store.upload(&path, audio, format.as_mime()),
        )
        .await?;

        let record = TranscriptionRecord::new(object_name, transcript.clone(), uploaded_at);

        bounded(
            Collaborator::Database,
            self.options.database_timeout,
            self.repository.insert(&record),
        )
        .await?;

        tracing::info!(
            object_name = %record.audio_object,
            confidence,
            "Transcription stored"
        );

        Ok(TranscriptionOutcome {
            transcript,
            confidence,
            transcribed_words,
        })
    }
}

async fn bounded<T, E>(
    collaborator: Collaborator,
    limit: Duration,
    call: impl Future<Output = Result<T, E>>,
) -> Result<T, TranscriptionServiceError>
where
    TranscriptionServiceError: From<E>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(TranscriptionServiceError::from),
        Err(_) => Err(TranscriptionServiceError::Timeout(collaborator)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionOutcome {
    pub transcript: String,
    pub confidence: f64,
    pub transcribed_words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Recognizer,
    Storage,
    Database,
}

impl Collaborator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recognizer => "recognizer",
            Self::Storage => "storage",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("unsupported media type: detected {0}")]
    UnsupportedMediaType(AudioFormat),
    #[error("recognizer returned no transcription result")]
    NoTranscriptionResult,
    #[error("recognizer: {0}")]
    Recognizer(#[from] RecognizerError),
    #[error("storage: {0}")]
    Storage(#[from] AudioStoreError),
    #[error("database: {0}")]
    Database(#[from] RepositoryError),
    #[error("{0} call timed out")]
    Timeout(Collaborator),
}

impl TranscriptionServiceError {
    /// The collaborator that failed, if any.
    pub fn collaborator(&self) -> Option<Collaborator> {
        match self {
            Self::UnsupportedMediaType(_) => None,
            Self::NoTranscriptionResult | Self::Recognizer(_) => Some(Collaborator::Recognizer),
            Self::Storage(_) => Some(Collaborator::Storage),
            Self::Database(_) => Some(Collaborator::Database),
            Self::Timeout(c) => Some(*c),
        }
    }

    /// Timeouts may succeed on a later attempt; everything else will not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
