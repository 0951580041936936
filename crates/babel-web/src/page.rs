//! Home page view.

use crate::view::{RenderContext, View};
use babel_i18n::I18nResult;
use maud::{html, Markup};

/// Heading and paragraph from the `messages` namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl HomePage {
    pub const NAMESPACE: &'static str = "messages";
}

impl View for HomePage {
    fn render(&self, ctx: &RenderContext) -> I18nResult<Markup> {
        let t = ctx.translator(Self::NAMESPACE);
        let welcome = t.t("welcome")?;
        let description = t.t("description")?;

        Ok(html! {
            div class="container" {
                h1 { (welcome) }
                p { (description) }
            }
        })
    }
}
