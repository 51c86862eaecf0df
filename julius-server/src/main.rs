//! Julius Server - OpenAI-compatible relay daemon
//!
//! Serves `POST /v1/chat/completions` and forwards each request to the
//! Julius playground, replaying the answer as JSON or synthetic SSE.
//! Every other path answers with a static liveness payload.
//!
//! Access via: http://localhost:8045

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use validator::Validate;

mod cli;
mod server_utils;

use cli::Cli;
use julius_core::proxy::server::RelayServer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.relay_config();
    config.validate().map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    info!("🚀 Julius relay v{} starting...", env!("CARGO_PKG_VERSION"));

    let listener = server_utils::create_listener(&config).await?;
    RelayServer::new(config)
        .run(listener, server_utils::shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("👋 Shutdown complete");
    Ok(())
}
