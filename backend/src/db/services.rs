//! High-level data service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers and binaries.
//! The analytics endpoints live in [`crate::services`]; this module covers
//! the catalog and raw listing.

use log::debug;

use super::repository::{FullRepository, RepositoryResult};
use crate::api::{ClimatePage, Location, Metric, Reading, ReadingFilter, ReadingOrder};

// ==================== Health & Connection ====================

/// Check if the store is healthy.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Catalog ====================

pub async fn list_locations<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Location>> {
    repo.list_locations().await
}

pub async fn list_metrics<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Metric>> {
    repo.list_metrics().await
}

// ==================== Readings ====================

/// Filtered readings in the requested order.
pub async fn fetch_readings<R: FullRepository + ?Sized>(
    repo: &R,
    filter: &ReadingFilter,
    order: ReadingOrder,
) -> RepositoryResult<Vec<Reading>> {
    let readings = repo.fetch_readings(filter, order).await?;
    debug!("Fetched {} readings for {:?}", readings.len(), filter);
    Ok(readings)
}

/// One page of the date-descending climate listing.
///
/// `page` and `per_page` are expected to be already clamped; see
/// [`crate::api::PageParams::resolve`].
pub async fn fetch_climate_page<R: FullRepository + ?Sized>(
    repo: &R,
    filter: &ReadingFilter,
    page: u32,
    per_page: u32,
) -> RepositoryResult<ClimatePage> {
    let page_data = repo.fetch_reading_page(filter, page, per_page).await?;
    debug!(
        "Climate page {} ({} per page): {} of {} rows",
        page,
        per_page,
        page_data.data.len(),
        page_data.meta.total_count
    );
    Ok(page_data)
}
