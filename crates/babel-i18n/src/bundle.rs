//! Message bundles and key lookup

use crate::error::{I18nError, I18nResult};
use crate::Locale;
use serde_json::{Map, Value};
use tracing::warn;

/// Translated strings for one locale, loaded wholesale from a JSON document.
///
/// Keys are dotted paths into nested objects, e.g. `messages.welcome`.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBundle {
    locale: Locale,
    messages: Map<String, Value>,
}

impl MessageBundle {
    /// Build a bundle from an already parsed document.
    ///
    /// `origin` names where the document came from and is only used in errors.
    pub fn from_value(locale: Locale, value: Value, origin: &str) -> I18nResult<Self> {
        match value {
            Value::Object(messages) => Ok(Self { locale, messages }),
            _ => Err(I18nError::InvalidBundle {
                path: origin.to_string(),
            }),
        }
    }

    /// Parse a bundle from JSON text
    pub fn from_json(locale: Locale, json: &str, origin: &str) -> I18nResult<Self> {
        let value = serde_json::from_str(json).map_err(|source| I18nError::ParseError {
            path: origin.to_string(),
            source,
        })?;
        Self::from_value(locale, value, origin)
    }

    /// Locale this bundle belongs to
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw value stored at a dotted key
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let mut current = self.messages.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// String message stored at a dotted key
    pub fn get(&self, key: &str) -> I18nResult<&str> {
        match self.lookup(key) {
            Some(Value::String(message)) => Ok(message.as_str()),
            Some(_) => Err(I18nError::InvalidMessage {
                key: key.to_string(),
            }),
            None => Err(I18nError::MessageNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Check if a string message exists at the given key
    pub fn has_message(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Translator scoped to a namespace; an empty namespace means the root.
    pub fn translator(&self, namespace: &str) -> Translator<'_> {
        Translator {
            bundle: self,
            namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
        }
    }
}

/// Namespaced view over a [`MessageBundle`]
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    bundle: &'a MessageBundle,
    namespace: Option<String>,
}

impl Translator<'_> {
    /// Namespace prefix applied to every key
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Fully qualified key for `key`
    pub fn qualify(&self, key: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{key}"),
            None => key.to_string(),
        }
    }

    /// Translate `key`; a missing or non-string message is an error.
    pub fn t(&self, key: &str) -> I18nResult<String> {
        self.bundle.get(&self.qualify(key)).map(str::to_string)
    }

    /// Translate `key`, rendering the fully qualified key when it cannot be resolved
    pub fn t_or_key(&self, key: &str) -> String {
        let qualified = self.qualify(key);
        match self.bundle.get(&qualified) {
            Ok(message) => message.to_string(),
            Err(e) => {
                warn!(
                    "{} in locale {}, rendering the key instead",
                    e,
                    self.bundle.locale()
                );
                qualified
            }
        }
    }
}
