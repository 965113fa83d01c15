//! RMS Gateway - Main Entry Point

use anyhow::{Context, Result};
use rms_gateway::{router, GatewayConfig};
use rms_sdk::RmsClient;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("rms=info,tower_http=info"))?;

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .init();
    }

    info!("RMS gateway v{} starting...", VERSION);

    let client = RmsClient::connect(&config.rpc_url)
        .await
        .with_context(|| format!("Invalid RPC URL {}", config.rpc_url))?;

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    info!(
        addr = %listener.local_addr()?,
        upstream = %config.rpc_url,
        "Gateway listening"
    );

    axum::serve(listener, router(client))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Shutdown complete.");

    Ok(())
}
