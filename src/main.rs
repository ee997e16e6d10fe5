use std::path::Path;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use leave_tracker::api::{AppState, create_router};
use leave_tracker::config::{ConfigLoader, LogFormat, LoggingSection, ServerConfig};

/// Environment variable naming the configuration file.
const CONFIG_PATH_ENV: &str = "LEAVE_TRACKER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

fn load_config() -> Result<ServerConfig> {
    let explicit = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok());

    let loader = match explicit {
        Some(path) => ConfigLoader::load(&path)
            .with_context(|| format!("failed to load configuration from {path}"))?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => ConfigLoader::load(DEFAULT_CONFIG_PATH)?,
        None => ConfigLoader::defaults(),
    };

    Ok(loader.with_env_overrides()?.into_config())
}

fn init_logging(logging: &LoggingSection) {
    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter);

    match logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    init_logging(&config.logging);

    let bind_address = config.server.bind_address.clone();
    let api_prefix = config.server.api_prefix.clone();
    let state = AppState::in_memory(config);
    let policy = state.leaves().policy();
    info!(
        default_daily_cap = policy.default_daily_cap,
        reduced_daily_cap = policy.reduced_daily_cap,
        capacity_lead = %policy.capacity_lead,
        "Leave policy loaded"
    );
    let router = create_router(state.clone());

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(
        bind_address = %bind_address,
        api_prefix = %api_prefix,
        version = env!("CARGO_PKG_VERSION"),
        "Leave tracker listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .context("server error")?;

    state.shutdown().await;
    info!("Leave tracker stopped");
    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
