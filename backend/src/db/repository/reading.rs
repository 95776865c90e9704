//! Reading repository trait: storing and querying climate readings.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{ClimatePage, ClimateReading, Reading, ReadingFilter, ReadingOrder};

/// Repository trait for climate readings.
///
/// Queries take a [`ReadingFilter`]; every criterion it carries must hold
/// for a reading to be returned.
#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Store a reading.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If the id is already taken
    ///   or the location/metric does not exist
    async fn store_reading(&self, reading: &ClimateReading) -> RepositoryResult<()>;

    /// Number of readings matching `filter`.
    async fn count_readings(&self, filter: &ReadingFilter) -> RepositoryResult<usize>;

    /// Readings matching `filter`, joined with their metric and location.
    ///
    /// With [`ReadingOrder::Unordered`] rows come back in storage order.
    async fn fetch_readings(
        &self,
        filter: &ReadingFilter,
        order: ReadingOrder,
    ) -> RepositoryResult<Vec<Reading>>;

    /// One page of flattened records, newest first.
    ///
    /// `page` is 1-based. A page past the end is empty but still carries
    /// the total count.
    async fn fetch_reading_page(
        &self,
        filter: &ReadingFilter,
        page: u32,
        per_page: u32,
    ) -> RepositoryResult<ClimatePage>;
}
