mod pg_pool;
mod repositories;

pub use repositories::MockTranscriptionRepository;
pub use repositories::PgTranscriptionRepository;

pub use pg_pool::{create_pool, run_migrations};
