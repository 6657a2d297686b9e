use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{RepositoryError, TranscriptionRepository};
use crate::domain::TranscriptionRecord;

pub struct PgTranscriptionRepository {
    pool: PgPool,
}

impl PgTranscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranscriptionRepository for PgTranscriptionRepository {
    #[instrument(skip(self, record), fields(audiofile_name = %record.audio_object))]
    async fn insert(&self, record: &TranscriptionRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO transcriptions (audiofile_name, transcription, date)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(record.audio_object.as_str())
        .bind(&record.transcript)
        .bind(record.uploaded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
