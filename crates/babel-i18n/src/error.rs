//! Error types for internationalization operations

use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// The locale identifier is not in the allow-list
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to read a bundle file
    #[error("Failed to load resource file: {path}")]
    ResourceLoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bundle file is not valid JSON
    #[error("Failed to parse message bundle {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Bundle document is valid JSON but not an object
    #[error("Message bundle {path} must be a JSON object")]
    InvalidBundle { path: String },

    /// Message not found in the bundle
    #[error("Message not found: {key}")]
    MessageNotFound { key: String },

    /// Key resolves to something other than a string
    #[error("Message '{key}' is not a string")]
    InvalidMessage { key: String },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = I18nError::MessageNotFound {
            key: "messages.welcome".to_string(),
        };
        assert_eq!(err.to_string(), "Message not found: messages.welcome");

        let err = I18nError::UnsupportedLocale("fr".to_string());
        assert_eq!(err.to_string(), "Unsupported locale: fr");
    }

    #[test]
    fn test_load_error_keeps_io_source() {
        let err = I18nError::ResourceLoadError {
            path: "locales/en/common.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load resource file: locales/en/common.json"
        );
        assert!(err.source().is_some());
    }
}
