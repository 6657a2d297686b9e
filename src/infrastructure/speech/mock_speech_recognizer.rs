use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{RecognizerError, SpeechRecognizer};
use crate::domain::{RecognitionAlternative, RecognitionConfig, RecognitionResponse, RecognizedWord};

/// Recognizer that answers from memory. Used for local runs and tests.
pub struct MockSpeechRecognizer {
    response: Option<RecognitionResponse>,
    calls: AtomicUsize,
}

impl MockSpeechRecognizer {
    pub fn returning(response: RecognitionResponse) -> Self {
        Self {
            response: Some(response),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_words(transcript: &str, confidence: f64, words: &[&str]) -> Self {
        Self::returning(RecognitionResponse::single(RecognitionAlternative {
            transcript: transcript.to_string(),
            confidence,
            words: words.iter().map(|w| RecognizedWord::new(*w)).collect(),
        }))
    }

    pub fn empty() -> Self {
        Self::returning(RecognitionResponse::default())
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockSpeechRecognizer {
    fn default() -> Self {
        Self::with_words("lot potvrda", 0.765, &["lot", "potvrda"])
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(
        &self,
        _audio_data: &[u8],
        _config: &RecognitionConfig,
    ) -> Result<RecognitionResponse, RecognizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .ok_or_else(|| RecognizerError::ApiRequestFailed("mock recognizer failure".into()))
    }
}
