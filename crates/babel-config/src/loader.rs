//! Configuration loading utilities

use crate::{Config, MessageSource};
use babel_common::{BabelError, Result as BabelResult};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "BABEL_CONFIG_PATH";

/// File names searched for when no path is given
const DEFAULT_FILE_NAMES: [&str; 2] = ["config.yaml", "config.yml"];

/// Where the configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A YAML file
    File(PathBuf),
    /// Built-in defaults plus environment overrides
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParseError { var: String, message: String },
}

impl From<ConfigError> for BabelError {
    fn from(err: ConfigError) -> Self {
        BabelError::config_with_source("Failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content, |var| env::var(var).ok())
    }

    /// Find the configuration in the working directory: `BABEL_CONFIG_PATH`,
    /// then `config.yaml`, then `config.yml`
    pub fn locate() -> ConfigSource {
        Self::locate_in(Path::new("."), |var| env::var(var).ok())
    }

    /// Same as [`ConfigLoader::locate`], searching `dir` and reading the
    /// environment through `lookup`
    pub fn locate_in<F>(dir: &Path, lookup: F) -> ConfigSource
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CONFIG_PATH_VAR) {
            return ConfigSource::File(PathBuf::from(path));
        }

        DEFAULT_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map_or(ConfigSource::Defaults, ConfigSource::File)
    }

    /// Load the configuration from `source`
    pub fn load_from(source: &ConfigSource) -> BabelResult<Config> {
        let config = match source {
            ConfigSource::File(path) => Self::load_config(path)?,
            ConfigSource::Defaults => Self::finish(Config::default(), |var| env::var(var).ok())?,
        };
        Ok(config)
    }

    /// Parse YAML text, apply overrides from `lookup` and validate
    pub fn from_yaml_str<F>(content: &str, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config: Config = serde_yaml::from_str(content)?;
        Self::finish(config, lookup)
    }

    fn finish<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_overrides(&mut config, lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Apply `BABEL_*` overrides read through `lookup`
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup("BABEL_BIND_ADDRESS") {
            config.server.bind_address = address;
        }

        if let Some(dir) = lookup("BABEL_LOCALES_DIR") {
            config.i18n.locales_dir = dir;
        }

        if let Some(source) = lookup("BABEL_MESSAGE_SOURCE") {
            config.i18n.source = source
                .parse::<MessageSource>()
                .map_err(|message| ConfigError::EnvParseError {
                    var: "BABEL_MESSAGE_SOURCE".to_string(),
                    message,
                })?;
        }

        if let Some(level) = lookup("BABEL_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("BABEL_LOG_JSON") {
            config.logging.json_format = json
                .parse()
                .map_err(|e: std::str::ParseBoolError| ConfigError::EnvParseError {
                    var: "BABEL_LOG_JSON".to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_load_full_yaml() {
        let yaml = "server:\n  bind_address: \"0.0.0.0:8080\"\ni18n:\n  source: directory\n  locales_dir: \"/srv/locales\"\nlogging:\n  level: \"debug\"\n  json_format: true\n";
        let config = ConfigLoader::from_yaml_str(yaml, no_env).unwrap();

        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.i18n.source, MessageSource::Directory);
        assert_eq!(config.i18n.locales_dir, "/srv/locales");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ConfigLoader::from_yaml_str("logging:\n  level: warn\n", no_env).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.i18n.source, MessageSource::Embedded);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json_format);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ConfigLoader::from_yaml_str("server: [unclosed", no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_message_source_in_yaml() {
        let result = ConfigLoader::from_yaml_str("i18n:\n  source: remote\n", no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validation_error() {
        let result =
            ConfigLoader::from_yaml_str("server:\n  bind_address: \"not an address\"\n", no_env);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let lookup = env_from(&[
            ("BABEL_BIND_ADDRESS", "127.0.0.1:9000"),
            ("BABEL_LOCALES_DIR", "/tmp/locales"),
            ("BABEL_MESSAGE_SOURCE", "directory"),
            ("BABEL_LOG_LEVEL", "trace"),
            ("BABEL_LOG_JSON", "true"),
        ]);
        let config =
            ConfigLoader::from_yaml_str("server:\n  bind_address: \"127.0.0.1:1\"\n", lookup)
                .unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert_eq!(config.i18n.locales_dir, "/tmp/locales");
        assert_eq!(config.i18n.source, MessageSource::Directory);
        assert_eq!(config.logging.level, "trace");
        assert!(config.logging.json_format);
    }

    #[test]
    fn test_env_parse_errors() {
        let result = ConfigLoader::from_yaml_str("{}", env_from(&[("BABEL_LOG_JSON", "maybe")]));
        assert!(matches!(
            result,
            Err(ConfigError::EnvParseError { var, .. }) if var == "BABEL_LOG_JSON"
        ));

        let result =
            ConfigLoader::from_yaml_str("{}", env_from(&[("BABEL_MESSAGE_SOURCE", "ftp")]));
        assert!(matches!(
            result,
            Err(ConfigError::EnvParseError { var, .. }) if var == "BABEL_MESSAGE_SOURCE"
        ));
    }

    #[test]
    fn test_env_override_is_validated() {
        let result =
            ConfigLoader::from_yaml_str("{}", env_from(&[("BABEL_BIND_ADDRESS", "nowhere")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"i18n:\n  locales_dir: \"./bundles\"\n").unwrap();

        let source = ConfigSource::File(file.path().to_path_buf());
        let config = ConfigLoader::load_from(&source).unwrap();
        assert_eq!(config.i18n.locales_dir, "./bundles");
    }

    #[test]
    fn test_locate_prefers_env_path_then_yaml_then_yml() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ConfigLoader::locate_in(dir.path(), no_env), ConfigSource::Defaults);
        assert_eq!(ConfigSource::Defaults.to_string(), "built-in defaults");

        fs::write(dir.path().join("config.yml"), "{}").unwrap();
        assert_eq!(
            ConfigLoader::locate_in(dir.path(), no_env),
            ConfigSource::File(dir.path().join("config.yml"))
        );

        fs::write(dir.path().join("config.yaml"), "{}").unwrap();
        assert_eq!(
            ConfigLoader::locate_in(dir.path(), no_env),
            ConfigSource::File(dir.path().join("config.yaml"))
        );

        let explicit = env_from(&[(CONFIG_PATH_VAR, "/etc/babel/config.yaml")]);
        assert_eq!(
            ConfigLoader::locate_in(dir.path(), explicit),
            ConfigSource::File(PathBuf::from("/etc/babel/config.yaml"))
        );
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config("/nonexistent/path/config.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));

        let babel: BabelError = result.unwrap_err().into();
        assert!(babel.to_string().starts_with("Configuration error"));
    }
}
