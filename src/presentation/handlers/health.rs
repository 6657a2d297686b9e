use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const HEALTH_MESSAGE: &str = "Health Check Passed!";

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            message: HEALTH_MESSAGE,
        }),
    )
}
