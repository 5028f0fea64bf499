// anthropic-proxy - PDF and image uploads to the Anthropic Messages API
// Author: kelexine (https://github.com/kelexine)

use anthropic_proxy::anthropic::AnthropicClient;
use anthropic_proxy::cli::Args;
use anthropic_proxy::config::AppConfig;
use anthropic_proxy::credentials::{CredentialProvider, EnvCredentials};
use anthropic_proxy::server::create_router;
use anthropic_proxy::utils::logging;
use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting anthropic-proxy v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Credentials are read per request; a missing key is not fatal here
    let credentials = EnvCredentials::new(config.anthropic.api_key_env.clone());
    if !credentials.is_configured() {
        warn!(
            "{} is not set; proxy requests will fail until it is",
            credentials.var()
        );
    }

    // Phase 4: Build the upstream client
    let client = AnthropicClient::new(&config.anthropic, &config.performance)?;
    info!(
        "Forwarding to {} with model {}",
        client.messages_url(),
        config.anthropic.model
    );

    // Phase 5: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, client, Arc::new(credentials))?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
