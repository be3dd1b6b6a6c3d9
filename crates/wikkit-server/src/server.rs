//! Server assembly and lifecycle.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use wikkit_core::FileStore;

use crate::config::WikiConfig;
use crate::routes::router;
use crate::state::{AppState, Site};
use crate::Result;

/// Build the router for a configuration, backed by a [`FileStore`] on the
/// configured data directory.
pub fn app(config: &WikiConfig) -> Result<Router> {
    let store = Arc::new(FileStore::new(&config.storage.data_dir));
    info!(data_dir = %store.root().display(), "Using flat-file page store");
    let site = Site {
        name: config.site.name.clone(),
        front_page: config.front_page()?,
    };
    Ok(router(AppState::new(store, site)))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: WikiConfig) -> Result<()> {
    config.validate()?;
    let app = app(&config)?;

    info!(
        listen = %config.server.listen,
        front_page = %config.site.front_page,
        "Binding HTTP listener"
    );
    let listener = TcpListener::bind(config.server.listen).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
