mod error;
mod health;
mod transcribe;

pub use error::{ApiError, ErrorResponse, status_for};
pub use health::{HEALTH_MESSAGE, HealthResponse, health_handler};
pub use transcribe::{TranscribeResponse, transcribe_handler};
