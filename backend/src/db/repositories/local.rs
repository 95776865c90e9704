//! In-memory local repository implementation.
//!
//! All data lives in ordered maps and a row vector behind a shared lock,
//! giving fast, deterministic and isolated execution for tests and for a
//! server seeded from a JSON file.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::api::*;
use crate::db::repository::*;

/// In-memory local repository.
///
/// Cloning is cheap and clones share the same data.
///
/// # Example
/// ```ignore
/// let repo = LocalRepository::new();
/// repo.store_location(&location).await?;
/// let locations = repo.list_locations().await?;
/// assert_eq!(locations.len(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    locations: BTreeMap<LocationId, Location>,
    metrics: BTreeMap<MetricId, Metric>,
    // Storage order is insertion order.
    readings: Vec<ClimateReading>,
    reading_ids: HashSet<ReadingId>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            locations: BTreeMap::new(),
            metrics: BTreeMap::new(),
            readings: Vec::new(),
            reading_ids: HashSet::new(),
            is_healthy: true,
        }
    }
}

impl LocalData {
    fn metric_name(&self, metric_id: MetricId) -> Option<&str> {
        self.metrics.get(&metric_id).map(|m| m.name.as_str())
    }

    /// Rows matching every criterion of `filter`, in storage order.
    fn matching<'a>(&'a self, filter: &'a ReadingFilter) -> impl Iterator<Item = &'a ClimateReading> {
        self.readings.iter().filter(move |row| {
            filter.matches_row(row)
                && self
                    .metric_name(row.metric_id)
                    .is_some_and(|name| filter.matches_metric(name))
        })
    }

    /// Join a stored row with its metric and location.
    fn to_reading(&self, row: &ClimateReading) -> Option<Reading> {
        let metric = self.metrics.get(&row.metric_id)?;
        let location = self.locations.get(&row.location_id)?;
        Some(
            Reading::new(
                metric.name.clone(),
                row.date,
                row.value,
                row.quality,
                metric.unit.clone(),
            )
            .with_location(LocationRef {
                id: location.id,
                name: location.name.clone(),
                latitude: location.latitude,
                longitude: location.longitude,
            }),
        )
    }

    fn to_record(&self, row: &ClimateReading) -> Option<ClimateRecord> {
        let metric = self.metrics.get(&row.metric_id)?;
        let location = self.locations.get(&row.location_id)?;
        Some(ClimateRecord {
            id: row.id,
            location_id: location.id,
            location_name: location.name.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            date: row.date,
            metric: metric.name.clone(),
            value: row.value,
            unit: metric.unit.clone(),
            quality: row.quality,
        })
    }
}

/// Stable sort so readings sharing a date keep their storage order.
fn sort_rows(rows: &mut [&ClimateReading], order: ReadingOrder) {
    let compare: fn(&&ClimateReading, &&ClimateReading) -> Ordering = match order {
        ReadingOrder::Unordered => return,
        ReadingOrder::DateAscending => |a, b| a.date.cmp(&b.date),
        ReadingOrder::DateDescending => |a, b| b.date.cmp(&a.date),
    };
    rows.sort_by(compare);
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository, keeping the health status.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    pub fn location_count(&self) -> usize {
        self.data.read().locations.len()
    }

    pub fn metric_count(&self) -> usize {
        self.data.read().metrics.len()
    }

    pub fn reading_count(&self) -> usize {
        self.data.read().readings.len()
    }

    pub fn has_location(&self, location_id: LocationId) -> bool {
        self.data.read().locations.contains_key(&location_id)
    }

    pub fn has_metric(&self, metric_id: MetricId) -> bool {
        self.data.read().metrics.contains_key(&metric_id)
    }

    pub fn has_reading(&self, reading_id: ReadingId) -> bool {
        self.data.read().reading_ids.contains(&reading_id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Local store is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Catalog Repository ====================

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_locations(&self) -> RepositoryResult<Vec<Location>> {
        self.check_health()?;
        Ok(self.data.read().locations.values().cloned().collect())
    }

    async fn list_metrics(&self) -> RepositoryResult<Vec<Metric>> {
        self.check_health()?;
        Ok(self.data.read().metrics.values().cloned().collect())
    }

    async fn store_location(&self, location: &Location) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        if data.locations.contains_key(&location.id) {
            return Err(RepositoryError::validation_with_context(
                format!("Location {} already exists", location.id),
                ErrorContext::new("store_location")
                    .with_entity("location")
                    .with_entity_id(location.id),
            ));
        }
        data.locations.insert(location.id, location.clone());
        Ok(())
    }

    async fn store_metric(&self, metric: &Metric) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        let context = || {
            ErrorContext::new("store_metric")
                .with_entity("metric")
                .with_entity_id(metric.id)
        };
        if data.metrics.contains_key(&metric.id) {
            return Err(RepositoryError::validation_with_context(
                format!("Metric {} already exists", metric.id),
                context(),
            ));
        }
        if data.metrics.values().any(|m| m.name == metric.name) {
            return Err(RepositoryError::validation_with_context(
                format!("Metric name '{}' already exists", metric.name),
                context(),
            ));
        }
        data.metrics.insert(metric.id, metric.clone());
        Ok(())
    }
}

// ==================== Reading Repository ====================

#[async_trait]
impl ReadingRepository for LocalRepository {
    async fn store_reading(&self, reading: &ClimateReading) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        let context = || {
            ErrorContext::new("store_reading")
                .with_entity("reading")
                .with_entity_id(reading.id)
        };
        if data.reading_ids.contains(&reading.id) {
            return Err(RepositoryError::validation_with_context(
                format!("Reading {} already exists", reading.id),
                context(),
            ));
        }
        if !data.locations.contains_key(&reading.location_id) {
            return Err(RepositoryError::validation_with_context(
                format!("Unknown location {}", reading.location_id),
                context(),
            ));
        }
        if !data.metrics.contains_key(&reading.metric_id) {
            return Err(RepositoryError::validation_with_context(
                format!("Unknown metric {}", reading.metric_id),
                context(),
            ));
        }
        data.reading_ids.insert(reading.id);
        data.readings.push(reading.clone());
        Ok(())
    }

    async fn count_readings(&self, filter: &ReadingFilter) -> RepositoryResult<usize> {
        self.check_health()?;
        Ok(self.data.read().matching(filter).count())
    }

    async fn fetch_readings(
        &self,
        filter: &ReadingFilter,
        order: ReadingOrder,
    ) -> RepositoryResult<Vec<Reading>> {
        self.check_health()?;
        let data = self.data.read();
        let mut rows: Vec<&ClimateReading> = data.matching(filter).collect();
        sort_rows(&mut rows, order);
        Ok(rows.into_iter().filter_map(|row| data.to_reading(row)).collect())
    }

    async fn fetch_reading_page(
        &self,
        filter: &ReadingFilter,
        page: u32,
        per_page: u32,
    ) -> RepositoryResult<ClimatePage> {
        self.check_health()?;
        let data = self.data.read();
        let mut rows: Vec<&ClimateReading> = data.matching(filter).collect();
        let total_count = rows.len();
        sort_rows(&mut rows, ReadingOrder::DateDescending);

        let offset = (page.max(1) as usize - 1).saturating_mul(per_page as usize);
        let records = rows
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .filter_map(|row| data.to_record(row))
            .collect();

        Ok(ClimatePage {
            data: records,
            meta: PageMeta {
                total_count,
                page,
                per_page,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn location(id: i64, name: &str) -> Location {
        Location {
            id: LocationId(id),
            name: name.to_string(),
            country: "Testland".to_string(),
            latitude: 10.0 + id as f64,
            longitude: -20.0,
            region: None,
        }
    }

    fn metric(id: i64, name: &str, unit: &str) -> Metric {
        Metric {
            id: MetricId(id),
            name: name.to_string(),
            display_name: name.to_string(),
            unit: unit.to_string(),
            description: None,
        }
    }

    fn row(id: i64, location: i64, metric: i64, day: u32, value: f64, quality: QualityLevel) -> ClimateReading {
        ClimateReading {
            id: ReadingId(id),
            location_id: LocationId(location),
            metric_id: MetricId(metric),
            date: date(day),
            value,
            quality,
        }
    }

    async fn seeded() -> LocalRepository {
        let repo = LocalRepository::new();
        repo.store_location(&location(1, "Irvine")).await.unwrap();
        repo.store_location(&location(2, "Oslo")).await.unwrap();
        repo.store_metric(&metric(1, "temperature", "celsius")).await.unwrap();
        repo.store_metric(&metric(2, "precipitation", "mm")).await.unwrap();

        let rows = [
            row(1, 1, 1, 3, 20.0, QualityLevel::Excellent),
            row(2, 1, 1, 1, 18.0, QualityLevel::Good),
            row(3, 2, 1, 2, 2.0, QualityLevel::Poor),
            row(4, 1, 2, 1, 4.5, QualityLevel::Questionable),
            row(5, 2, 2, 3, 9.0, QualityLevel::Good),
        ];
        for r in &rows {
            repo.store_reading(r).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());

        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());
        let err = repo.list_locations().await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
    }

    #[tokio::test]
    async fn test_catalog_listing_ordered_by_id() {
        let repo = LocalRepository::new();
        repo.store_location(&location(5, "Lima")).await.unwrap();
        repo.store_location(&location(2, "Oslo")).await.unwrap();

        let ids: Vec<LocationId> = repo
            .list_locations()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![LocationId(2), LocationId(5)]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let repo = seeded().await;

        let err = repo.store_location(&location(1, "Again")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));

        let err = repo
            .store_metric(&metric(9, "temperature", "kelvin"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));

        let err = repo
            .store_reading(&row(1, 1, 1, 9, 1.0, QualityLevel::Good))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(repo.reading_count(), 5);
    }

    #[tokio::test]
    async fn test_dangling_references_rejected() {
        let repo = seeded().await;

        let err = repo
            .store_reading(&row(10, 99, 1, 1, 1.0, QualityLevel::Good))
            .await
            .unwrap_err();
        assert_eq!(err.context().entity.as_deref(), Some("reading"));

        assert!(repo
            .store_reading(&row(11, 1, 99, 1, 1.0, QualityLevel::Good))
            .await
            .is_err());
        assert!(!repo.has_reading(ReadingId(10)));
        assert!(!repo.has_reading(ReadingId(11)));
    }

    #[tokio::test]
    async fn test_fetch_readings_joins_metric_and_location() {
        let repo = seeded().await;
        let filter = ReadingFilter::new().location(LocationId(2)).metric("precipitation");
        let readings = repo
            .fetch_readings(&filter, ReadingOrder::Unordered)
            .await
            .unwrap();

        assert_eq!(readings.len(), 1);
        let reading = &readings[0];
        assert_eq!(reading.metric, "precipitation");
        assert_eq!(reading.unit, "mm");
        assert_eq!(reading.value, 9.0);
        let location = reading.location.as_ref().unwrap();
        assert_eq!(location.name, "Oslo");
        assert_eq!(location.latitude, 12.0);
    }

    #[tokio::test]
    async fn test_fetch_readings_ordering() {
        let repo = seeded().await;
        let filter = ReadingFilter::new();

        let unordered: Vec<f64> = repo
            .fetch_readings(&filter, ReadingOrder::Unordered)
            .await
            .unwrap()
            .iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(unordered, vec![20.0, 18.0, 2.0, 4.5, 9.0]);

        let ascending: Vec<f64> = repo
            .fetch_readings(&filter, ReadingOrder::DateAscending)
            .await
            .unwrap()
            .iter()
            .map(|r| r.value)
            .collect();
        // ties keep storage order
        assert_eq!(ascending, vec![18.0, 4.5, 2.0, 20.0, 9.0]);

        let descending: Vec<f64> = repo
            .fetch_readings(&filter, ReadingOrder::DateDescending)
            .await
            .unwrap()
            .iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(descending, vec![20.0, 9.0, 2.0, 18.0, 4.5]);
    }

    #[tokio::test]
    async fn test_quality_and_date_filters() {
        let repo = seeded().await;

        let good = ReadingFilter::new().min_quality(QualityLevel::Good);
        assert_eq!(repo.count_readings(&good).await.unwrap(), 3);

        let window = ReadingFilter::new().between(Some(date(2)), Some(date(3)));
        assert_eq!(repo.count_readings(&window).await.unwrap(), 3);

        let unknown_metric = ReadingFilter::new().metric("wind");
        assert_eq!(repo.count_readings(&unknown_metric).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_reading_page() {
        let repo = seeded().await;
        let filter = ReadingFilter::new();

        let first = repo.fetch_reading_page(&filter, 1, 2).await.unwrap();
        assert_eq!(first.meta.total_count, 5);
        assert_eq!(first.meta.page, 1);
        assert_eq!(first.meta.per_page, 2);
        let ids: Vec<ReadingId> = first.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![ReadingId(1), ReadingId(5)]);
        assert_eq!(first.data[1].location_name, "Oslo");
        assert_eq!(first.data[1].unit, "mm");

        let last = repo.fetch_reading_page(&filter, 3, 2).await.unwrap();
        assert_eq!(last.data.len(), 1);
        assert_eq!(last.data[0].id, ReadingId(4));

        let past_end = repo.fetch_reading_page(&filter, 9, 2).await.unwrap();
        assert!(past_end.data.is_empty());
        assert_eq!(past_end.meta.total_count, 5);
    }

    #[tokio::test]
    async fn test_clear_keeps_health() {
        let repo = seeded().await;
        repo.set_healthy(false);
        repo.clear();

        assert_eq!(repo.location_count(), 0);
        assert_eq!(repo.metric_count(), 0);
        assert_eq!(repo.reading_count(), 0);
        assert!(!repo.health_check().await.unwrap());
    }
}
