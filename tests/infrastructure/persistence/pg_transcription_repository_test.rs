use chrono::{DateTime, TimeZone, Utc};
use sqlx::Row;

use diktat::application::ports::TranscriptionRepository;
use diktat::domain::{StoragePath, TranscriptionRecord};

use crate::helpers::TestPostgres;

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn given_record_when_inserting_then_row_is_persisted() {
    let test_pg = TestPostgres::new().await;
    let uploaded_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let record = TranscriptionRecord::new(
        StoragePath::for_upload("audio", uploaded_at),
        "lot potvrda".to_string(),
        uploaded_at,
    );

    test_pg
        .repository
        .insert(&record)
        .await
        .expect("Failed to insert transcription");

    let row = sqlx::query("SELECT audiofile_name, transcription, date FROM transcriptions")
        .fetch_one(&test_pg.pool)
        .await
        .expect("Failed to read transcription");

    assert_eq!(row.get::<String, _>("audiofile_name"), "audio_2024-05-01 12:30:00");
    assert_eq!(row.get::<String, _>("transcription"), "lot potvrda");
    assert_eq!(row.get::<DateTime<Utc>, _>("date"), uploaded_at);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn given_two_records_when_inserting_then_both_rows_exist() {
    let test_pg = TestPostgres::new().await;

    for second in 0..2 {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, second).unwrap();
        let record = TranscriptionRecord::new(
            StoragePath::for_upload("audio", at),
            format!("snimka {}", second),
            at,
        );
        test_pg.repository.insert(&record).await.unwrap();
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transcriptions")
        .fetch_one(&test_pg.pool)
        .await
        .unwrap();

    assert_eq!(count, 2);
}
