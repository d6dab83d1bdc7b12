//! Marketplace backend: serves the item catalog, search, and the built
//! storefront assets.

mod api;
mod catalog;
mod config;
mod logging;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{Router, routing::get};
use marketplace_core::{ITEMS_PATH, SEARCH_PATH};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::AppState;
use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::logging::{LoggingConfig, LoggingError};

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Core(#[from] marketplace_core::Error),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

fn router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/health", get(api::health))
        .route(ITEMS_PATH, get(api::list_items))
        .route(SEARCH_PATH, get(api::search_items));

    if let Some(dir) = static_dir {
        info!(dist = %dir.display(), "Serving storefront assets");
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {e}");
        return;
    }
    info!("Received Ctrl+C, shutting down");
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::load()?;

    let _guard = logging::init(&LoggingConfig::for_server(&config)?)?;

    info!("Starting marketplace server");

    let catalog = Catalog::load(&config.catalog_path)?;
    let state = Arc::new(AppState::new(catalog));
    let app = router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_address,
            source,
        })?;
    info!(addr = %config.bind_address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            // The subscriber may not be installed yet.
            error!("{e}");
            eprintln!("marketplace-server: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
