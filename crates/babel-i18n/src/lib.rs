//! # Babel I18n
//!
//! Locale allow-list and message bundle loading for the babel site.
//!
//! A [`Locale`] can only be one of the supported languages, so a
//! [`MessageBundle`] is never built for anything outside the allow-list.
//! Bundles are plain JSON documents (`<locale>/common.json`) addressed with
//! dotted keys such as `messages.welcome`.
//!
//! # Example
//!
//! ```rust
//! use babel_i18n::{request_config, EmbeddedLoader, Locale};
//!
//! # async fn example() -> Result<(), babel_i18n::I18nError> {
//! let config = request_config(&EmbeddedLoader, None).await?;
//! assert_eq!(config.locale, Locale::Es);
//!
//! let t = config.messages.translator("messages");
//! println!("{}", t.t("welcome")?);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bundle;
pub mod error;
pub mod loader;
pub mod locale;

pub use bundle::{MessageBundle, Translator};
pub use error::{I18nError, I18nResult};
pub use loader::{
    request_config, resolve_locale, DirectoryLoader, EmbeddedLoader, MessageLoader, RequestConfig,
};
pub use locale::Locale;
pub use unic_langid::LanguageIdentifier;
