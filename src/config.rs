//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! The frontend has no file system, so it always runs with
//! [`Config::default`]; the native binaries load the full file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub reader: ReaderConfig,

    #[serde(default)]
    pub survey: SurveyConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Comic reader behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReaderConfig {
    /// Pages revealed when a chapter is opened in webtoon mode
    #[serde(default = "default_initial_pages")]
    pub initial_pages: u32,

    /// Intersection ratio at which the sentinel counts as visible
    #[serde(default = "default_sentinel_threshold")]
    pub sentinel_threshold: f64,
}

fn default_initial_pages() -> u32 {
    3
}

fn default_sentinel_threshold() -> f64 {
    1.0
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            initial_pages: default_initial_pages(),
            sentinel_threshold: default_sentinel_threshold(),
        }
    }
}

/// First-visit survey behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SurveyConfig {
    /// Delay between first mount and the survey popping up
    #[serde(default = "default_survey_delay")]
    pub delay_ms: u64,

    /// Device-local storage key of the "already shown" flag
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_survey_delay() -> u64 {
    2000 // 2 seconds
}

fn default_storage_key() -> String {
    "surveyShown".to_string()
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_survey_delay(),
            storage_key: default_storage_key(),
        }
    }
}

/// Static site server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built frontend (`index.html`, wasm, assets)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> String {
    "./webcomic-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Socket address string to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the native tools keep their device-local storage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("webcomic").to_string_lossy().to_string())
        .unwrap_or_else(|| "./webcomic_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
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

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
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

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here: the caller usually has no subscriber yet, so
    /// the outcome is returned and reported with [`LoadedConfig::log`].
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("webcomic").join("config.toml")),
            Some(PathBuf::from("/etc/webcomic/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |name| std::env::var(name).ok())
    }

    /// First readable file of `paths`, then overrides from `var`
    fn load_first(paths: &[PathBuf], var: impl Fn(&str) -> Option<String>) -> LoadedConfig {
        let mut warnings = Vec::new();
        let mut found = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    found = Some((config, path.clone()));
                    break;
                }
                Err(e) => warnings.push(format!("Failed to load config from {:?}: {}", path, e)),
            }
        }

        let (mut config, source) = match found {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        };
        warnings.extend(config.apply_overrides(var));

        LoadedConfig {
            config,
            source,
            warnings,
        }
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        for warning in self.apply_overrides(|name| std::env::var(name).ok()) {
            tracing::warn!("{}", warning);
        }
    }

    /// Returns a message for every override that was ignored
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut ignored = Vec::new();

        if let Some(host) = var("WEBCOMIC_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("WEBCOMIC_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => ignored.push(format!("Ignoring invalid WEBCOMIC_PORT: {}", port)),
            }
        }
        if let Some(dist_dir) = var("WEBCOMIC_DIST_DIR") {
            self.server.dist_dir = dist_dir;
        }

        if let Some(data_dir) = var("WEBCOMIC_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(delay) = var("WEBCOMIC_SURVEY_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => self.survey.delay_ms = ms,
                Err(_) => {
                    ignored.push(format!("Ignoring invalid WEBCOMIC_SURVEY_DELAY_MS: {}", delay))
                }
            }
        }

        if let Some(level) = var("WEBCOMIC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("WEBCOMIC_LOG_FORMAT") {
            self.logging.format = format;
        }

        ignored
    }
}

/// Outcome of [`Config::load_default`]
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` when only defaults were used
    pub source: Option<PathBuf>,
    /// Unreadable files and ignored overrides
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Report where the config came from; call once logging is initialized
    pub fn log(&self) {
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
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
    r#"# MyWebComic Configuration
#
# Environment variables override these settings:
# - WEBCOMIC_HOST
# - WEBCOMIC_PORT
# - WEBCOMIC_DIST_DIR
# - WEBCOMIC_DATA_DIR
# - WEBCOMIC_SURVEY_DELAY_MS
# - WEBCOMIC_LOG_LEVEL
# - WEBCOMIC_LOG_FORMAT

[reader]
# Pages revealed when a chapter is opened in webtoon mode
initial_pages = 3

# Intersection ratio (0.0 - 1.0) at which the bottom sentinel loads a page
sentinel_threshold = 1.0

[survey]
# Delay before the first-visit survey pops up (ms)
delay_ms = 2000

# Local storage key remembering that the survey was shown
storage_key = "surveyShown"

[server]
# Static site server host
host = "0.0.0.0"

# Static site server port
port = 8084

# Directory containing the built frontend
dist_dir = "./webcomic-ui/dist"

[storage]
# Where the command-line tools keep their local storage file
data_dir = "~/.local/share/webcomic"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
