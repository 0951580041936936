//! # Babel Web
//!
//! Server-rendered, locale-prefixed home page.
//!
//! A request for `/{locale}` goes through the [`LocaleLayout`], which checks
//! the locale against the allow-list, loads that locale's message bundle and
//! renders the [`HomePage`] inside the document shell. Unsupported locales end
//! in a not-found response before any bundle is loaded.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod layout;
pub mod page;
pub mod server;
pub mod view;

pub use error::{WebError, WebResult};
pub use layout::{LayoutOutcome, LayoutPhase, LocaleLayout, RouteParams};
pub use page::HomePage;
pub use server::{create_router, loader_from_config, start_server, AppState};
pub use view::{RenderContext, View};
