//! Data-access module for the climate catalog and readings.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / binaries                                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs, crate::services)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                         │
//! │  - CatalogRepository (locations, metrics)                │
//! │  - ReadingRepository (filtered readings, paging)         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────┐
//!     │  Local Repository (in-memory,     │
//!     │  seeded from JSON)                │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use ecovision::db::{self, services};
//!
//! let repo = db::create_configured_repository().await?;
//! let locations = services::list_locations(repo.as_ref()).await?;
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod seed;
pub mod services;


// ==================== Service Layer ====================

pub use services::{fetch_climate_page, fetch_readings, health_check, list_locations, list_metrics};

// ==================== Repository Pattern Exports ====================

pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    CatalogRepository, ErrorContext, FullRepository, ReadingRepository, RepositoryError,
    RepositoryResult,
};
pub use seed::{load_seed_file, seed_from_file, seed_repository, SampleData, SeedError, SeedSummary};

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

/// Build the repository from `repository.toml`, or from the environment when
/// no configuration file is found.
pub async fn create_configured_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    match RepositoryConfig::from_default_location() {
        Ok(config) => RepositoryFactory::from_repository_config(&config).await,
        Err(e) => {
            warn!("{}; falling back to environment configuration", e);
            RepositoryFactory::from_env().await
        }
    }
}

/// Initialize the global repository singleton. Later calls are no-ops.
pub async fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_configured_repository()
        .await
        .context("Failed to create repository")?;
    if REPOSITORY.set(repo).is_ok() {
        info!("Repository initialized");
    }
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
