//! Request-level error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use babel_i18n::I18nError;
use tracing::error;

/// Errors that abort a request or the server.
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    /// Bundle loading or message lookup failed.
    #[error("Localization failed: {0}")]
    I18n(#[from] I18nError),

    /// I/O error, e.g. while binding the listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for web operations.
pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
