//! Application configuration structures

use babel_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    #[validate]
    pub server: ServerConfig,

    /// Message bundle settings
    #[validate]
    pub i18n: I18nConfig,

    /// Logging settings
    #[validate]
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. `127.0.0.1:3000`
    #[validate(custom = "crate::validation::validate_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Where message bundles come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSource {
    /// Bundles compiled into the binary
    #[default]
    Embedded,
    /// Bundles read from `locales_dir` on every request
    Directory,
}

impl fmt::Display for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

impl FromStr for MessageSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embedded" => Ok(Self::Embedded),
            "directory" => Ok(Self::Directory),
            other => Err(format!("unknown message source '{other}'")),
        }
    }
}

/// Message bundle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct I18nConfig {
    /// Bundle source
    pub source: MessageSource,

    /// Directory holding `<locale>/common.json`, used by the directory source
    #[validate(length(min = 1, message = "Locales directory cannot be empty"))]
    pub locales_dir: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            source: MessageSource::Embedded,
            locales_dir: "locales".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Tracing filter directive
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,

    /// Emit JSON log lines
    pub json_format: bool,

    /// Multi-line colored output, ignored when `json_format` is set
    pub pretty_format: bool,

    /// Log span open and close events, e.g. around each layout render
    pub include_spans: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            include_spans: false,
        }
    }
}

impl LoggingSettings {
    /// Subscriber settings for these options, with `level_override` winning
    /// over the configured level
    pub fn to_logging_config(&self, level_override: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            level: level_override.unwrap_or(&self.level).to_string(),
            json_format: self.json_format,
            pretty_format: self.pretty_format,
            include_spans: self.include_spans,
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Validate the whole configuration tree
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}
