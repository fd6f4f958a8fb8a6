//! HTTP server for nearstay
//!
//! Provides REST API endpoints for location resolution.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::Result;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server
///
/// # Arguments
/// * `config` - Server configuration
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run(config: Config) -> Result<()> {
    let addr = config.server_addr();
    let state = Arc::new(AppState::from_config(config)?);
    serve(&addr, state).await
}

/// Start the HTTP server with explicit state and address
///
/// Useful for tests or when you want to override config
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| crate::error::Error::Server(format!("Invalid server address: {}", e)))?;

    info!(
        catalog_size = state.catalog.len(),
        geocoder = state.geocoder_name,
        "Starting server on {}",
        addr
    );

    let app = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
