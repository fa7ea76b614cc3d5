//! Holidaze HTTP Server Binary
//!
//! This is the main entry point for the booking REST API server.
//! It builds the repository, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository (default), optionally seeded
//! HOLIDAZE_SEED=venues.json cargo run --bin holidaze-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `HOLIDAZE_SEED`: Path to a JSON venue seed file (optional)
//! - `HOLIDAZE_FETCH_CAP`: Coarse fetch ceiling for availability search
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use holidaze::db::{LocalRepository, SearchConfig};
use holidaze::http::{create_router, AppState};

/// Build the log filter from an optional `RUST_LOG`-style directive
/// string, defaulting to `info`. Full directive syntax is supported
/// (e.g. `info,tower_http=debug`).
fn log_filter(spec: Option<&str>) -> EnvFilter {
    match spec {
        Some(spec) => EnvFilter::new(spec),
        None => EnvFilter::new("info"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .init();

    info!("Starting Holidaze HTTP Server");

    // Build the repository, seeded from file when configured
    let repository = match env::var("HOLIDAZE_SEED") {
        Ok(path) => {
            let repo = LocalRepository::from_json_file(&path)
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;
            info!("Seeded {} venues from {}", repo.len(), path);
            repo
        }
        Err(_) => LocalRepository::new(),
    };

    // Create application state
    let state = AppState::new(Arc::new(repository)).with_search_config(SearchConfig::from_env());

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
