//! Seed data loading.
//!
//! A seed file is a JSON document with three arrays:
//!
//! ```json
//! {
//!   "locations":    [{"id": 1, "name": "Irvine", "country": "USA", "latitude": 33.68, "longitude": -117.83, "region": "California"}],
//!   "metrics":      [{"id": 1, "name": "temperature", "display_name": "Temperature", "unit": "celsius", "description": "..."}],
//!   "climate_data": [{"id": 1, "location_id": 1, "metric_id": 1, "date": "2025-01-01", "value": 15.2, "quality": "good"}]
//! }
//! ```
//!
//! Rows whose id already exists are skipped. Readings with an unknown quality
//! grade or a malformed date are skipped with a warning. A file that cannot
//! be read or parsed as a whole is an error.

use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::repository::{FullRepository, RepositoryError};
use crate::api::{ClimateReading, Location, LocationId, Metric, MetricId, QualityLevel, ReadingId};

/// Errors that abort seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Could not read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A reading as it appears in the seed file, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    pub id: ReadingId,
    pub location_id: LocationId,
    pub metric_id: MetricId,
    pub date: String,
    pub value: f64,
    pub quality: String,
}

impl RawReading {
    /// Validate the grade and date. The error names the offending field.
    pub fn validate(&self) -> Result<ClimateReading, String> {
        let quality: QualityLevel = self.quality.parse().map_err(|_| {
            format!(
                "Invalid quality level '{}' for data point {}",
                self.quality, self.id
            )
        })?;
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|e| {
            format!(
                "Invalid date format '{}' for data point {}: {}",
                self.date, self.id, e
            )
        })?;
        Ok(ClimateReading {
            id: self.id,
            location_id: self.location_id,
            metric_id: self.metric_id,
            date,
            value: self.value,
            quality,
        })
    }
}

/// Parsed seed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleData {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub climate_data: Vec<RawReading>,
}

/// What a seeding run stored and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub locations_added: usize,
    pub locations_skipped: usize,
    pub metrics_added: usize,
    pub metrics_skipped: usize,
    pub readings_added: usize,
    pub readings_skipped: usize,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} locations ({} skipped), {} metrics ({} skipped), {} readings ({} skipped)",
            self.locations_added,
            self.locations_skipped,
            self.metrics_added,
            self.metrics_skipped,
            self.readings_added,
            self.readings_skipped
        )
    }
}

pub fn parse_seed_data(content: &str) -> Result<SampleData, SeedError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_seed_file(path: &Path) -> Result<SampleData, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed_data(&content)
}

/// Store `data` into `repo`, locations and metrics first.
///
/// Validation rejections from the repository (existing ids, dangling
/// references) skip the row; any other repository error aborts.
pub async fn seed_repository<R: FullRepository + ?Sized>(
    repo: &R,
    data: &SampleData,
) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    for location in &data.locations {
        match repo.store_location(location).await {
            Ok(()) => {
                debug!("Added location: {}", location.name);
                summary.locations_added += 1;
            }
            Err(RepositoryError::ValidationError { .. }) => {
                info!("Location {} already exists, skipping", location.name);
                summary.locations_skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    for metric in &data.metrics {
        match repo.store_metric(metric).await {
            Ok(()) => {
                debug!("Added metric: {}", metric.display_name);
                summary.metrics_added += 1;
            }
            Err(RepositoryError::ValidationError { .. }) => {
                info!("Metric {} already exists, skipping", metric.name);
                summary.metrics_skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    for raw in &data.climate_data {
        let reading = match raw.validate() {
            Ok(reading) => reading,
            Err(message) => {
                warn!("{}", message);
                summary.readings_skipped += 1;
                continue;
            }
        };
        match repo.store_reading(&reading).await {
            Ok(()) => summary.readings_added += 1,
            Err(e @ RepositoryError::ValidationError { .. }) => {
                debug!("Skipping data point {}: {}", raw.id, e);
                summary.readings_skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!("Seeded {}", summary);
    Ok(summary)
}

/// Load a seed file and store its contents.
pub async fn seed_from_file<R: FullRepository + ?Sized>(
    repo: &R,
    path: &Path,
) -> Result<SeedSummary, SeedError> {
    let data = load_seed_file(path)?;
    seed_repository(repo, &data).await
}
