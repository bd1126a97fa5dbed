use serde::Deserialize;

/// Port the proxy listens on. Not configurable.
pub const PORT: u16 = 8787;

/// Largest accepted request body. Payloads up to 50 MiB must get through.
pub const BODY_LIMIT: usize = 50 * 1024 * 1024;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8811";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: String,
}

impl BackendConfig {
    pub fn summarize_url(&self) -> String {
        format!("{}/summarize_rfp", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}
