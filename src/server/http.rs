use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::config::GameConfig;

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
}

/// Static client plus two read-only endpoints. Holds no game state.
pub fn router(static_dir: &str) -> Router {
    Router::new()
        .route("/api/config", get(game_config))
        .route("/api/health", get(health))
        .fallback_service(ServeDir::new(static_dir))
}

async fn game_config() -> Json<GameConfig> {
    Json(GameConfig::default())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}
