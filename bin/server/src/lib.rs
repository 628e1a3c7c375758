//! HTTP front end of the My Telegrams voice skill.
//!
//! Receives one turn per request, runs it through the conversation
//! dispatcher and returns the speech plus the session attributes the platform
//! should store for the next turn.

pub mod config;
pub mod error;
pub mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::{AppState, router};
use my_telegrams_conversation::Dispatcher;
use my_telegrams_i18n::{BuiltinPhrases, RandomSelector};
use my_telegrams_integration::HttpBackend;
use rootcause::prelude::Report;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the dispatcher and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the backend client cannot be built, the address
/// cannot be bound, or the server fails.
pub async fn serve(config: ServerConfig) -> Result<(), Report<ServerError>> {
    let backend = HttpBackend::new(&config.backend).map_err(|report| ServerError::Backend {
        reason: report.to_string(),
    })?;
    let dispatcher = Dispatcher::with_default_handlers(
        Arc::new(backend),
        Arc::new(BuiltinPhrases),
        Arc::new(RandomSelector),
    );
    let app = router(AppState {
        dispatcher: Arc::new(dispatcher),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| ServerError::Bind {
            address: config.bind_address.clone(),
            reason: e.to_string(),
        })?;

    info!("listening on http://{}", config.bind_address);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve {
            reason: e.to_string(),
        })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
