use anyhow::Result;
use summarize_proxy::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a level (`info`) or directive list (`summarize_proxy=debug,tower_http=info`)
fn parse_log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration is read once; logging depends on it
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match parse_log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(
        backend = %config.backend.base_url,
        "Starting summarize proxy with log level: {}",
        log_level
    );

    server::run(config).await?;

    Ok(())
}
