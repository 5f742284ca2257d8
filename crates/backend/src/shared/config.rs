use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shared::analytics::{queries::DEFAULT_TOP_N, LoadOptions, TextEncoding};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
    #[serde(default)]
    pub encoding: TextEncoding,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// chrono layouts tried in order; empty means the built-in list
    #[serde(default)]
    pub timestamp_formats: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Row limit for ranked charts when the request does not give one
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

fn default_delimiter() -> char {
    ','
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "data/OnlineRetail.csv"
encoding = "latin1"
delimiter = ","

[server]
host = "127.0.0.1"
port = 3000

[dashboard]
top_n = 10
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return parse_config(&std::fs::read_to_string(&config_path)?);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Parse and validate a config document
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if !config.dataset.delimiter.is_ascii() {
        anyhow::bail!(
            "dataset.delimiter must be a single ASCII character, got '{}'",
            config.dataset.delimiter
        );
    }
    if config.dashboard.top_n == 0 {
        anyhow::bail!("dashboard.top_n must be at least 1");
    }
    Ok(config)
}

/// Get the dataset file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_dataset_path(config: &Config) -> PathBuf {
    let path = Path::new(&config.dataset.path);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(path);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: relative to the current directory
    path.to_path_buf()
}

impl DatasetConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            encoding: self.encoding,
            // validated ASCII in parse_config
            delimiter: self.delimiter as u8,
            timestamp_formats: self.timestamp_formats.clone(),
        }
    }
}
