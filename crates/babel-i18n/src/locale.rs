//! Supported locales

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Supported locales. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Locale {
    /// Locale used when a request does not name one
    pub const FALLBACK: Self = Self::Es;

    /// Every supported locale, in routing order
    pub const ALL: [Self; 2] = [Self::Es, Self::En];

    /// Get the short language code used in paths and bundle names
    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parse a locale from its exact short code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Bundle path relative to the locales directory
    pub fn resource_path(self) -> String {
        format!("{}/common.json", self.code())
    }

    /// Unicode language identifier rendered as the document `lang`
    pub fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}
