use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{LocationId, QualityLevel, ReadingId};

// =========================================================
// Climate listing types + route
// =========================================================

/// Default page size for the climate listing.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Upper bound on the page size for the climate listing.
pub const MAX_PER_PAGE: u32 = 100;

/// A stored reading flattened with its location and metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    pub id: ReadingId,
    pub location_id: LocationId,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub metric: String,
    pub value: f64,
    pub unit: String,
    pub quality: QualityLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total_count: usize,
    pub page: u32,
    pub per_page: u32,
}

/// One page of the date-descending climate listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimatePage {
    pub data: Vec<ClimateRecord>,
    pub meta: PageMeta,
}
