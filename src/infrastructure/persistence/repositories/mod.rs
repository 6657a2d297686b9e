mod mock_repository;
mod pg_transcription_repository;

pub use mock_repository::MockTranscriptionRepository;
pub use pg_transcription_repository::PgTranscriptionRepository;
