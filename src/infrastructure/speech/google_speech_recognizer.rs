use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RecognizerError, SpeechRecognizer};
use crate::domain::{
    RecognitionAlternative, RecognitionConfig, RecognitionResponse, RecognitionSegment,
    RecognizedWord,
};

pub const DEFAULT_ENDPOINT: &str = "https://speech.googleapis.com/v1p1beta1";

/// Google Cloud Speech-to-Text over its REST `speech:recognize` method.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(endpoint: Option<&str>, api_key: &str) -> Result<Self, RecognizerError> {
        if api_key.trim().is_empty() {
            return Err(RecognizerError::InvalidConfiguration(
                "API key required for Google Speech".to_string(),
            ));
        }
        let url = format!(
            "{}/speech:recognize",
            endpoint.unwrap_or(DEFAULT_ENDPOINT).trim_end_matches('/')
        );
        Ok(Self {
            client: reqwest::Client::new(),
            url,
            api_key: api_key.to_string(),
        })
    }
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    config: WireConfig<'a>,
    audio: WireAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireConfig<'a> {
    encoding: &'static str,
    language_code: &'a str,
    diarization_config: WireDiarization,
    speech_contexts: Vec<WireSpeechContext<'a>>,
    metadata: WireMetadata,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireDiarization {
    enable_speaker_diarization: bool,
}

#[derive(Serialize)]
struct WireSpeechContext<'a> {
    phrases: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireMetadata {
    interaction_type: &'static str,
    microphone_distance: &'static str,
    recording_device_type: &'static str,
    recording_device_name: &'static str,
    industry_naics_code_of_audio: u32,
}

#[derive(Serialize)]
struct WireAudio {
    content: String,
}

impl<'a> WireConfig<'a> {
    fn from_domain(config: &'a RecognitionConfig) -> Self {
        let speech_contexts = if config.vocabulary_hints.is_empty() {
            Vec::new()
        } else {
            vec![WireSpeechContext {
                phrases: &config.vocabulary_hints,
            }]
        };

        Self {
            encoding: config.encoding.as_str(),
            language_code: &config.locale,
            diarization_config: WireDiarization {
                enable_speaker_diarization: config.enable_speaker_diarization,
            },
            speech_contexts,
            metadata: WireMetadata {
                interaction_type: config.metadata.interaction_type.as_str(),
                microphone_distance: config.metadata.microphone_distance.as_str(),
                recording_device_type: config.metadata.device_type.as_str(),
                recording_device_name: config.metadata.device_name,
                industry_naics_code_of_audio: config.metadata.industry_naics_code,
            },
        }
    }
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<WireResult>,
}

#[derive(Deserialize)]
struct WireResult {
    #[serde(default)]
    alternatives: Vec<WireAlternative>,
}

#[derive(Deserialize)]
struct WireAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    words: Vec<WireWord>,
}

#[derive(Deserialize)]
struct WireWord {
    word: String,
}

impl From<RecognizeResponse> for RecognitionResponse {
    fn from(response: RecognizeResponse) -> Self {
        let results = response
            .results
            .into_iter()
            .map(|r| RecognitionSegment {
                alternatives: r
                    .alternatives
                    .into_iter()
                    .map(|a| RecognitionAlternative {
                        transcript: a.transcript,
                        confidence: a.confidence,
                        words: a.words.into_iter().map(|w| RecognizedWord::new(w.word)).collect(),
                    })
                    .collect(),
            })
            .collect();

        RecognitionResponse::new(results)
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(
        &self,
        audio_data: &[u8],
        config: &RecognitionConfig,
    ) -> Result<RecognitionResponse, RecognizerError> {
        let request = RecognizeRequest {
            config: WireConfig::from_domain(config),
            audio: WireAudio {
                content: STANDARD.encode(audio_data),
            },
        };

        tracing::debug!(
            locale = %config.locale,
            hints = config.vocabulary_hints.len(),
            bytes = audio_data.len(),
            "Sending audio to Google Speech"
        );

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecognizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognizerError::MalformedResponse(format!("parse response: {}", e)))?;

        tracing::info!(
            results = result.results.len(),
            "Google Speech recognition completed"
        );

        Ok(result.into())
    }
}
