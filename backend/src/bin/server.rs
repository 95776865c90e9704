//! EcoVision HTTP Server Binary
//!
//! Builds the repository from `repository.toml` (or the environment), loads
//! the seed file and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ecovision-server
//!
//! SEED_DATA_PATH=data/sample_data.json PORT=5000 cargo run --bin ecovision-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_CONFIG`: Path to `repository.toml`
//! - `REPOSITORY_TYPE`: Repository backend when no config file is found (default: local)
//! - `SEED_DATA_PATH`: Seed file, overriding the configured one
//! - `RUST_LOG`: Log filter (default: info)
//!
//! A `.env` file in the working directory is loaded first.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use ecovision::db::{self, CatalogRepository};
use ecovision::http::{create_router, AppState};
use ecovision::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    logging::init_logging();
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    info!("Starting EcoVision HTTP Server");

    db::init_repository().await?;
    let repository = Arc::clone(db::get_repository()?);
    info!(
        "Repository ready with {} locations and {} metrics",
        repository.list_locations().await?.len(),
        repository.list_metrics().await?.len()
    );

    let app = create_router(AppState::new(repository));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
