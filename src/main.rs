//! Max Smart web server entry point.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use max_smart_web::{AppState, config::AppConfig, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load().context("failed to load configuration")?;

    telemetry::init(&config.log).context("failed to initialize tracing")?;

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        json_logs = config.log.json,
        "Configuration loaded"
    );

    server::start_server(Arc::new(AppState::new(config))).await?;
    Ok(())
}
