use std::sync::Arc;

use crate::application::ports::{RecognizerError, SpeechRecognizer};
use crate::presentation::config::{RecognitionProviderSetting, RecognitionSettings};

use super::google_speech_recognizer::GoogleSpeechRecognizer;
use super::mock_speech_recognizer::MockSpeechRecognizer;

pub struct SpeechRecognizerFactory;

impl SpeechRecognizerFactory {
    pub fn create(
        settings: &RecognitionSettings,
    ) -> Result<Arc<dyn SpeechRecognizer>, RecognizerError> {
        match settings.provider {
            RecognitionProviderSetting::Google => {
                let key = settings.api_key.as_deref().ok_or_else(|| {
                    RecognizerError::InvalidConfiguration(
                        "recognition.api_key required for Google Speech".to_string(),
                    )
                })?;
                let recognizer = GoogleSpeechRecognizer::new(settings.endpoint.as_deref(), key)?;
                Ok(Arc::new(recognizer))
            }
            RecognitionProviderSetting::Mock => {
                tracing::warn!("Using in-memory mock speech recognizer");
                Ok(Arc::new(MockSpeechRecognizer::default()))
            }
        }
    }
}
