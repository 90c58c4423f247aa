use anyhow::Context;
use football_api::client::FootballApi;

mod config;
mod error;
mod handlers;
mod routes;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting fixture query service");

    let config = Config::from_env().context("Failed to load service configuration")?;
    tracing::info!("Configuration loaded, upstream at {}", config.api_football_url);

    let api = FootballApi::with_base_url(&config.api_football_url, &config.api_football_key);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    tracing::info!("Server running at http://{}/api/matches", bind_address);

    axum::serve(listener, routes::app(api))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
