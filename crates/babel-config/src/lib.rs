//! Configuration management for babel

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader, ConfigSource};
pub use settings::{Config, I18nConfig, LoggingSettings, MessageSource, ServerConfig};
