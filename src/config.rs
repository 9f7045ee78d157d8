//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::data::DEFAULT_COUNT;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8083
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dataset generation limits
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Records generated when a request names no count
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Largest count a request may ask for
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_max_count() -> usize {
    100_000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            max_count: default_max_count(),
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Write session state to disk; when false it is kept in memory only
    #[serde(default = "default_persist")]
    pub persist: bool,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("showcase").to_string_lossy().to_string())
        .unwrap_or_else(|| "./showcase_data".to_string())
}

fn default_persist() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            persist: default_persist(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("showcase").join("config.toml")),
            Some(PathBuf::from("/etc/showcase/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment in production)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = lookup("SHOWCASE_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("SHOWCASE_API_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }

        // Generator overrides
        if let Some(max) = lookup("SHOWCASE_MAX_COUNT").and_then(|m| m.parse().ok()) {
            self.generator.max_count = max;
        }

        // Session overrides
        if let Some(data_dir) = lookup("SHOWCASE_DATA_DIR") {
            self.session.data_dir = data_dir;
        }

        // Logging overrides
        if let Some(level) = lookup("SHOWCASE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SHOWCASE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Showcase Configuration
#
# Environment variables override these settings:
# - SHOWCASE_API_HOST
# - SHOWCASE_API_PORT
# - SHOWCASE_MAX_COUNT
# - SHOWCASE_DATA_DIR
# - SHOWCASE_LOG_LEVEL
# - SHOWCASE_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8083

# Allowed CORS origins (empty = any origin)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

[generator]
# Records generated when a request does not name a count
default_count = 50

# Largest count a single request may ask for
max_count = 100000

[session]
# Directory holding session.json
data_dir = "~/.local/share/showcase"

# Persist counter and filters across restarts
persist = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
