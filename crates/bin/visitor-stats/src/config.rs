//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `visitor-stats.toml` in the working directory. Every field has
//! a sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "visitor-stats.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the pre-computed snapshot comes from.
    pub input: InputConfig,
    /// Where the rendered HTML goes.
    pub output: OutputConfig,
    /// Render switches.
    pub render: RenderConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Snapshot source.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path of the snapshot JSON document.
    pub snapshot: PathBuf,
}

/// Rendered output destination.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File to write; stdout when unset.
    pub path: Option<PathBuf>,
    /// Wrap the fragment in a complete HTML document.
    pub standalone: bool,
}

/// Render switches.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render the skeleton placeholders instead of the cards.
    pub loading: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `visitor-stats.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("VISITOR_STATS_SNAPSHOT") {
            self.input.snapshot = PathBuf::from(val);
        }
        if let Some(val) = lookup("VISITOR_STATS_OUTPUT") {
            self.output.path = (!val.is_empty()).then(|| PathBuf::from(val));
        }
        if let Some(flag) = lookup("VISITOR_STATS_STANDALONE").as_deref().and_then(parse_flag) {
            self.output.standalone = flag;
        }
        if let Some(flag) = lookup("VISITOR_STATS_LOADING").as_deref().and_then(parse_flag) {
            self.render.loading = flag;
        }
        if let Some(val) = lookup("VISITOR_STATS_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.input.snapshot.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "input.snapshot must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("snapshot.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "visitor_stats=info,visitor_stats_adapter_html_askama=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
