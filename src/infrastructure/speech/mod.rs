mod google_speech_recognizer;
mod mock_speech_recognizer;
mod recognizer_factory;

pub use google_speech_recognizer::{DEFAULT_ENDPOINT, GoogleSpeechRecognizer};
pub use mock_speech_recognizer::MockSpeechRecognizer;
pub use recognizer_factory::SpeechRecognizerFactory;
