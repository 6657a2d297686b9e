mod audio_format;
mod recognition_config;
mod recognition_response;
mod storage_path;
mod transcript_normalizer;
mod transcription_record;

pub use audio_format::{AudioFormat, is_supported};
pub use recognition_config::{
    AudioEncoding, InteractionType, MicrophoneDistance, RecognitionConfig, RecordingDeviceType,
    RecordingMetadata,
};
pub use recognition_response::{
    RecognitionAlternative, RecognitionResponse, RecognitionSegment, RecognizedWord,
};
pub use storage_path::StoragePath;
pub use transcript_normalizer::{COMMA, LocaleVocabulary, TranscriptNormalizer, vocabulary_for};
pub use transcription_record::TranscriptionRecord;
