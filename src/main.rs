use std::sync::Arc;

use diktat::application::services::TranscriptionService;
use diktat::infrastructure::observability::{TracingConfig, init_tracing};
use diktat::infrastructure::persistence::{PgTranscriptionRepository, create_pool, run_migrations};
use diktat::infrastructure::speech::SpeechRecognizerFactory;
use diktat::infrastructure::storage::AudioStoreFactory;
use diktat::presentation::{AppState, Environment, RouterOptions, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(environment, settings.logging.json).with_env_override(),
        settings.server.port,
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    run_migrations(&pool).await?;

    let recognizer = SpeechRecognizerFactory::create(&settings.recognition)?;
    let audio_store = AudioStoreFactory::create(&settings.storage)?;
    let repository = Arc::new(PgTranscriptionRepository::new(pool));

    let transcription_service = Arc::new(TranscriptionService::new(
        recognizer,
        audio_store,
        repository,
        settings.transcription_options(),
    ));

    tracing::info!(
        locale = %settings.recognition.locale,
        hints = settings.recognition.vocabulary_hints.len(),
        provider = ?settings.recognition.provider,
        "Transcription service ready"
    );

    if settings.server.permissive_cors {
        tracing::warn!("Permissive CORS enabled: all origins allowed with credentials");
    }

    let router = create_router(
        AppState::new(transcription_service),
        RouterOptions {
            permissive_cors: settings.server.permissive_cors,
        },
    );

    let listener = settings.server.bind().await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
