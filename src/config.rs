//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::RenderContext;
use crate::format::parse_date;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the dataset comes from
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Local path or `http(s)://` URL
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_source() -> String {
    "data/sample-dataset.json".to_string()
}

fn default_fetch_timeout() -> u64 {
    10
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8360
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
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

/// Rendering knobs
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Fixed reference date (`YYYY-MM-DD`) for age and tenure; local date if unset
    #[serde(default)]
    pub today: Option<String>,

    #[serde(default = "default_skills_shown")]
    pub skills_shown: usize,

    #[serde(default = "default_chart_skills")]
    pub chart_skills: usize,

    #[serde(default = "default_goals_shown")]
    pub goals_shown: usize,
}

fn default_skills_shown() -> usize {
    RenderContext::DEFAULT_SKILLS_SHOWN
}

fn default_chart_skills() -> usize {
    RenderContext::DEFAULT_CHART_SKILLS
}

fn default_goals_shown() -> usize {
    RenderContext::DEFAULT_GOALS_SHOWN
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            today: None,
            skills_shown: default_skills_shown(),
            chart_skills: default_chart_skills(),
            goals_shown: default_goals_shown(),
        }
    }
}

impl RenderConfig {
    /// Build the render context, resolving `today`
    pub fn context(&self) -> Result<RenderContext, ConfigError> {
        let mut ctx = match &self.today {
            Some(raw) => {
                let today = parse_date(raw).ok_or_else(|| ConfigError::InvalidValue {
                    key: "render.today".to_string(),
                    value: raw.clone(),
                })?;
                RenderContext::new(today)
            }
            None => RenderContext::today(),
        };
        ctx.skills_shown = self.skills_shown;
        ctx.chart_skills = self.chart_skills;
        ctx.goals_shown = self.goals_shown;
        Ok(ctx)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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
            dirs::config_dir().map(|p| p.join("worker360").join("config.toml")),
            Some(PathBuf::from("/etc/worker360/config.toml")),
            Some(PathBuf::from("./worker360.toml")),
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
        if let Ok(source) = std::env::var("WORKER360_DATASET") {
            self.dataset.source = source;
        }

        if let Ok(host) = std::env::var("WORKER360_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("WORKER360_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(today) = std::env::var("WORKER360_TODAY") {
            self.render.today = Some(today);
        }

        if let Ok(level) = std::env::var("WORKER360_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("WORKER360_LOG_FORMAT") {
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

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Worker 360 Configuration
#
# Environment variables override these settings:
# - WORKER360_DATASET
# - WORKER360_HOST
# - WORKER360_PORT
# - WORKER360_TODAY
# - WORKER360_LOG_LEVEL
# - WORKER360_LOG_FORMAT

[dataset]
# Local file path or http(s) URL of the dataset JSON
source = "data/sample-dataset.json"

# Timeout for fetching a remote dataset (seconds)
fetch_timeout_secs = 10

[server]
# HTTP server host
host = "127.0.0.1"

# HTTP server port
port = 8360

# Allowed CORS origins (empty: same-origin only)
cors_origins = []

[render]
# Fixed reference date for age and tenure (defaults to the local date)
# today = "2024-06-14"

# Skill tags in the profile header before "+N more"
skills_shown = 5

# Skills plotted on the radar chart
chart_skills = 6

# Performance goals on the employee dashboard
goals_shown = 3

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
