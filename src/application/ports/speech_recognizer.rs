use async_trait::async_trait;

use crate::domain::{RecognitionConfig, RecognitionResponse};

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(
        &self,
        audio_data: &[u8],
        config: &RecognitionConfig,
    ) -> Result<RecognitionResponse, RecognizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
