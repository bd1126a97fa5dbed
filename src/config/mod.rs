mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (if present) and applies the
/// `RUN_URL` backend override.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let mut config = load_from(explicit_path.as_deref()).await?;

    if let Ok(run_url) = env::var("RUN_URL") {
        apply_backend_override(&mut config, &run_url);
    }

    Ok(config)
}

/// Reads a YAML config file. Without an explicit path, a missing
/// `config.yaml` falls back to defaults.
pub async fn load_from(path: Option<&str>) -> Result<Config> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    debug!("Loading configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(config_path).await {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && path.is_none() => {
            debug!("No configuration file found, using defaults");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(Error::config(format!(
                "failed to read {}: {}",
                config_path, e
            )));
        }
    };

    let config: Config = serde_yaml::from_str(&config_str)?;
    validate(&config)?;

    Ok(config)
}

pub fn apply_backend_override(config: &mut Config, run_url: &str) {
    let run_url = run_url.trim();
    if !run_url.is_empty() {
        config.backend.base_url = run_url.trim_end_matches('/').to_string();
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.backend.base_url.trim().is_empty() {
        return Err(Error::config("backend.base_url must not be empty"));
    }
    Ok(())
}
