//! Configuration loading
//!
//! Configuration is read only from a file named with `--config`; without it
//! the built-in defaults apply. The log level from the file is overridden by
//! `RUST_LOG` when set.

use crate::item_info::{RecordUrlTemplate, DEFAULT_RECORD_URL};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings loaded from the TOML configuration file
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Record link configuration (optional)
    #[serde(default)]
    pub links: LinkConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Record link configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// URL template for record links, must contain `{eid}`
    #[serde(default = "default_record_url")]
    pub record_url: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            record_url: default_record_url(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_record_url() -> String {
    DEFAULT_RECORD_URL.to_string()
}

impl Settings {
    /// Parse settings from TOML text and validate them
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;
        settings.record_url_template()?;
        Ok(settings)
    }

    /// Load settings from an explicitly named file, or use defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Record URL template from the link configuration
    pub fn record_url_template(&self) -> Result<RecordUrlTemplate> {
        RecordUrlTemplate::new(&self.links.record_url)
    }
}
