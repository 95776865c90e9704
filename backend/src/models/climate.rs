//! Catalog and storage entities: locations, metrics and stored readings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::quality::QualityLevel;

crate::define_id_type!(i64, LocationId);
crate::define_id_type!(i64, MetricId);
crate::define_id_type!(i64, ReadingId);

/// A monitoring site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub region: Option<String>,
}

/// A measured quantity and its display unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: MetricId,
    pub name: String,
    pub display_name: String,
    pub unit: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A stored measurement row, keyed by location and metric ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateReading {
    pub id: ReadingId,
    pub location_id: LocationId,
    pub metric_id: MetricId,
    pub date: NaiveDate,
    pub value: f64,
    pub quality: QualityLevel,
}
