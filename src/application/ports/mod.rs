mod audio_store;
mod repository_error;
mod speech_recognizer;
mod transcription_repository;

pub use audio_store::{AudioStore, AudioStoreError};
pub use repository_error::RepositoryError;
pub use speech_recognizer::{RecognizerError, SpeechRecognizer};
pub use transcription_repository::TranscriptionRepository;
