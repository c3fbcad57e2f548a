use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides `nasa.api_key`
pub const API_KEY_ENV: &str = "NASA_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NasaConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// NeoWs feed endpoint
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Days to keep rotated log files
    #[serde(default = "default_log_retention_days")]
    pub log_retention_days: u64,

    /// Directory the index page is written to at startup
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    #[serde(default)]
    pub nasa: NasaConfig,
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_feed_url() -> String {
    "https://api.nasa.gov/neo/rest/v1/feed".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_retention_days() -> u64 {
    3
}

fn default_template_dir() -> String {
    "templates".to_string()
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            feed_url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            log_retention_days: default_log_retention_days(),
            template_dir: default_template_dir(),
            nasa: NasaConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist. `NASA_API_KEY` is applied on top.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: TrackerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Replace the API key unless the override is missing or blank
    pub fn apply_api_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.nasa.api_key = key;
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
