use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blobarena::config::{SERVER_PORT, STATIC_DIR, WORLD_SIZE};
use blobarena::server::http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // The game runs in the browser; this process only hands out the client.
    let app = http::router(STATIC_DIR);

    let addr = format!("0.0.0.0:{}", SERVER_PORT);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, static_dir = STATIC_DIR, world_size = WORLD_SIZE, "serving arena client");

    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
