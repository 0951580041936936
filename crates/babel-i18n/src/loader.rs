//! Message bundle loading

use crate::bundle::MessageBundle;
use crate::error::{I18nError, I18nResult};
use crate::Locale;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Source of message bundles, keyed by locale.
///
/// Implementations load a fresh bundle on every call.
#[async_trait]
pub trait MessageLoader: Send + Sync {
    /// Load the complete bundle for `locale`
    async fn load(&self, locale: Locale) -> I18nResult<MessageBundle>;
}

/// Bundles compiled into the binary from this crate's `locales/` directory
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl EmbeddedLoader {
    /// JSON source compiled in for `locale`
    pub fn source(locale: Locale) -> &'static str {
        match locale {
            Locale::Es => include_str!("../locales/es/common.json"),
            Locale::En => include_str!("../locales/en/common.json"),
        }
    }
}

#[async_trait]
impl MessageLoader for EmbeddedLoader {
    async fn load(&self, locale: Locale) -> I18nResult<MessageBundle> {
        debug!("Loading embedded bundle for locale: {}", locale);
        MessageBundle::from_json(
            locale,
            Self::source(locale),
            &format!("embedded:{}", locale.resource_path()),
        )
    }
}

/// Reads `<base_dir>/<locale>/common.json` from disk on every load
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    base_dir: PathBuf,
}

impl DirectoryLoader {
    /// Create a loader rooted at `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the base directory for bundles
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the bundle file for `locale`
    pub fn bundle_path(&self, locale: Locale) -> PathBuf {
        self.base_dir.join(locale.resource_path())
    }
}

impl Default for DirectoryLoader {
    fn default() -> Self {
        Self::new("locales")
    }
}

#[async_trait]
impl MessageLoader for DirectoryLoader {
    async fn load(&self, locale: Locale) -> I18nResult<MessageBundle> {
        let path = self.bundle_path(locale);
        let display_path = path.to_string_lossy().to_string();

        debug!("Loading bundle file: {:?}", path);

        let content = tokio::fs::read_to_string(&path).await.map_err(|source| {
            warn!("Failed to read bundle {}: {}", display_path, source);
            I18nError::ResourceLoadError {
                path: display_path.clone(),
                source,
            }
        })?;

        let bundle = MessageBundle::from_json(locale, &content, &display_path)?;
        info!("Loaded bundle for locale {} from {}", locale, display_path);
        Ok(bundle)
    }
}

/// Resolve an optional locale identifier, falling back to [`Locale::FALLBACK`]
/// when it is absent or empty.
pub fn resolve_locale(requested: Option<&str>) -> I18nResult<Locale> {
    match requested {
        None | Some("") => Ok(Locale::FALLBACK),
        Some(code) => code.parse(),
    }
}

/// Locale and messages for a single request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    /// Resolved locale
    pub locale: Locale,
    /// Bundle loaded for `locale`
    pub messages: MessageBundle,
}

/// Resolve the request locale and load its bundle.
///
/// Load failures propagate; there is no fallback to another locale.
pub async fn request_config<L>(loader: &L, requested: Option<&str>) -> I18nResult<RequestConfig>
where
    L: MessageLoader + ?Sized,
{
    let locale = resolve_locale(requested)?;
    let messages = loader.load(locale).await?;
    Ok(RequestConfig { locale, messages })
}
