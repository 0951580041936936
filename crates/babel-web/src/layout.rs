//! Locale-prefixed document layout.
//!
//! Per request the layout moves through
//! `Start -> Validating -> NotFound` or
//! `Start -> Validating -> Loading -> Rendering`.
//! Nothing is kept between requests.

use crate::error::WebResult;
use crate::view::{RenderContext, View};
use babel_i18n::{request_config, LanguageIdentifier, Locale, MessageLoader, RequestConfig};
use maud::{html, Markup, DOCTYPE};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Path parameters of a locale-prefixed route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteParams {
    /// Raw, unvalidated locale segment
    pub locale: String,
}

impl RouteParams {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

/// Phases of a single layout render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPhase {
    Start,
    Validating,
    NotFound,
    Loading,
    Rendering,
}

impl LayoutPhase {
    /// Whether the render stops in this phase
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::NotFound | Self::Rendering)
    }
}

impl fmt::Display for LayoutPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Validating => "validating",
            Self::NotFound => "not_found",
            Self::Loading => "loading",
            Self::Rendering => "rendering",
        };
        f.write_str(name)
    }
}

/// Result of a layout render.
#[derive(Debug, Clone)]
pub enum LayoutOutcome {
    /// The locale segment is not in the allow-list
    NotFound,
    /// Complete HTML document
    Rendered(Markup),
}

impl LayoutOutcome {
    /// Terminal phase that produced this outcome
    pub fn phase(&self) -> LayoutPhase {
        match self {
            Self::NotFound => LayoutPhase::NotFound,
            Self::Rendered(_) => LayoutPhase::Rendering,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Validates the locale segment, loads its bundle and wraps child views in
/// the document shell.
#[derive(Clone)]
pub struct LocaleLayout {
    loader: Arc<dyn MessageLoader>,
}

impl fmt::Debug for LocaleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleLayout")
            .field("loader", &"<dyn MessageLoader>")
            .finish()
    }
}

impl LocaleLayout {
    pub fn new(loader: Arc<dyn MessageLoader>) -> Self {
        Self { loader }
    }

    /// Render `child` for the locale in `params`.
    ///
    /// Returns [`LayoutOutcome::NotFound`] without touching the loader when
    /// the locale is unsupported. Load and lookup failures propagate.
    #[instrument(skip_all, fields(locale = %params.locale))]
    pub async fn render(&self, params: RouteParams, child: &dyn View) -> WebResult<LayoutOutcome> {
        debug!(phase = %LayoutPhase::Start);

        debug!(phase = %LayoutPhase::Validating);
        let Some(locale) = Locale::from_code(&params.locale) else {
            info!(phase = %LayoutPhase::NotFound, "Unsupported locale requested");
            return Ok(LayoutOutcome::NotFound);
        };

        debug!(phase = %LayoutPhase::Loading);
        let RequestConfig { locale, messages } =
            request_config(&*self.loader, Some(locale.code())).await?;
        let lang = locale.to_language_identifier()?;
        let ctx = RenderContext::new(messages);

        debug!(phase = %LayoutPhase::Rendering);
        let content = child.render(&ctx)?;
        Ok(LayoutOutcome::Rendered(Self::shell(&lang, content)))
    }

    /// Document shell with `lang` set to the validated locale.
    pub fn shell(lang: &LanguageIdentifier, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang=(lang.to_string()) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                }
                body {
                    (content)
                }
            }
        }
    }
}
