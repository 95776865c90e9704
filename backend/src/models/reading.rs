//! Engine input: a denormalized, quality-graded reading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::climate::LocationId;
use super::quality::QualityLevel;

/// Where a reading was taken; only used when reporting anomalies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: LocationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One measurement as handed to the analytics engine.
///
/// Built by the data-access layer from a stored row joined with its metric
/// and location, after filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub metric: String,
    pub date: NaiveDate,
    pub value: f64,
    pub quality: QualityLevel,
    pub unit: String,
    #[serde(default)]
    pub location: Option<LocationRef>,
}

impl Reading {
    pub fn new(
        metric: impl Into<String>,
        date: NaiveDate,
        value: f64,
        quality: QualityLevel,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            metric: metric.into(),
            date,
            value,
            quality,
            unit: unit.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: LocationRef) -> Self {
        self.location = Some(location);
        self
    }

    /// Weight of this reading in the quality-weighted average.
    pub fn weight(&self) -> f64 {
        self.quality.weight()
    }
}
