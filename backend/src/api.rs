//! Public API surface for the Rust backend.
//!
//! This file consolidates the domain types and DTOs exposed over HTTP.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    ClimateReading, Location, LocationId, LocationRef, Metric, MetricId, QualityLevel, Reading,
    ReadingFilter, ReadingId, ReadingOrder,
};
pub use crate::routes::climate::ClimatePage;
pub use crate::routes::climate::ClimateRecord;
pub use crate::routes::climate::PageMeta;
pub use crate::routes::filters::FilterError;
pub use crate::routes::filters::FilterParams;
pub use crate::routes::filters::PageParams;
pub use crate::routes::summary::SummaryData;
pub use crate::routes::summary::SummaryResult;
pub use crate::routes::trends::Anomaly;
pub use crate::routes::trends::Coordinates;
pub use crate::routes::trends::Seasonality;
pub use crate::routes::trends::SeasonalityPeriod;
pub use crate::routes::trends::TrendDirection;
pub use crate::routes::trends::TrendInfo;
pub use crate::routes::trends::TrendResult;
pub use crate::routes::trends::TrendsData;

use serde::{Deserialize, Serialize};

/// `{"data": ...}` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
