//! HTTP routing and server startup
//!
//! Routes:
//! - `GET /health` reports liveness and the supported locales
//! - `GET /:locale` renders the home page through the locale layout
//! - anything else is a 404

use crate::error::{WebError, WebResult};
use crate::layout::{LayoutOutcome, LocaleLayout, RouteParams};
use crate::page::HomePage;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use babel_config::{Config, I18nConfig, MessageSource};
use babel_i18n::{DirectoryLoader, EmbeddedLoader, Locale, MessageLoader};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Shared application state for the router
#[derive(Clone, Debug)]
pub struct AppState {
    /// Layout wrapping every locale-prefixed page
    pub layout: Arc<LocaleLayout>,
}

impl AppState {
    pub fn new(loader: Arc<dyn MessageLoader>) -> Self {
        Self {
            layout: Arc::new(LocaleLayout::new(loader)),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the server answers
    pub status: &'static str,
    /// Supported locale codes
    pub locales: Vec<&'static str>,
}

/// Build the bundle loader selected by configuration
pub fn loader_from_config(config: &I18nConfig) -> Arc<dyn MessageLoader> {
    match config.source {
        MessageSource::Embedded => Arc::new(EmbeddedLoader),
        MessageSource::Directory => Arc::new(DirectoryLoader::new(&config.locales_dir)),
    }
}

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/:locale", get(locale_home))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        locales: Locale::ALL.iter().map(|locale| locale.code()).collect(),
    })
}

async fn locale_home(
    State(state): State<AppState>,
    params: Result<Path<RouteParams>, PathRejection>,
) -> WebResult<Response> {
    // A segment that cannot be decoded is not a supported locale either
    let Path(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            debug!("Rejected locale segment: {}", rejection);
            return Ok(not_found().await.into_response());
        }
    };

    let response = match state.layout.render(params, &HomePage).await? {
        LayoutOutcome::Rendered(document) => document.into_response(),
        LayoutOutcome::NotFound => not_found().await.into_response(),
    };
    Ok(response)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Bind `config.server.bind_address` and serve until Ctrl-C
pub async fn start_server(config: &Config) -> WebResult<()> {
    let loader = loader_from_config(&config.i18n);
    info!(
        "Serving message bundles from the {} source",
        config.i18n.source
    );

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(config.server.bind_address.as_str()).await?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WebError::Io)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, stopping server");
}
