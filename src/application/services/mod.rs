mod transcription_service;

pub use transcription_service::{
    Collaborator, TranscriptionOptions, TranscriptionOutcome, TranscriptionService,
    TranscriptionServiceError,
};
