//! Catalog repository trait: locations and metrics.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Location, Metric};

/// Repository trait for the location and metric catalog.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Check if the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if it is unhealthy but no error occurred
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// All locations ordered by id.
    async fn list_locations(&self) -> RepositoryResult<Vec<Location>>;

    /// All metrics ordered by id.
    async fn list_metrics(&self) -> RepositoryResult<Vec<Metric>>;

    /// Store a location.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If the id is already taken
    async fn store_location(&self, location: &Location) -> RepositoryResult<()>;

    /// Store a metric.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If the id or name is already taken
    async fn store_metric(&self, metric: &Metric) -> RepositoryResult<()>;
}
