//! Views and the context handed down to them.

use babel_i18n::{I18nResult, Locale, MessageBundle, Translator};
use maud::Markup;

/// Everything a view may read while rendering one request.
#[derive(Debug, Clone)]
pub struct RenderContext {
    locale: Locale,
    messages: MessageBundle,
}

impl RenderContext {
    pub fn new(messages: MessageBundle) -> Self {
        Self {
            locale: messages.locale(),
            messages,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn messages(&self) -> &MessageBundle {
        &self.messages
    }

    /// Shorthand for `messages().translator(namespace)`.
    pub fn translator(&self, namespace: &str) -> Translator<'_> {
        self.messages.translator(namespace)
    }
}

/// A piece of page content rendered inside the layout.
pub trait View: Send + Sync {
    fn render(&self, ctx: &RenderContext) -> I18nResult<Markup>;
}
