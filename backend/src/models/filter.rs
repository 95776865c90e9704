//! Filter criteria resolved by the data-access layer before analytics run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::climate::{ClimateReading, LocationId};
use super::quality::QualityLevel;

/// Reading filter shared by the listing, summary and trends endpoints.
///
/// Every criterion is optional; an empty filter matches everything. Date
/// bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingFilter {
    pub location_id: Option<LocationId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub metric: Option<String>,
    pub quality_threshold: Option<QualityLevel>,
}

impl ReadingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = Some(metric.into());
        self
    }

    pub fn min_quality(mut self, threshold: QualityLevel) -> Self {
        self.quality_threshold = Some(threshold);
        self
    }

    /// Checks the row-level criteria. The metric name is matched by the
    /// caller, which holds the metric catalog.
    pub fn matches_row(&self, row: &ClimateReading) -> bool {
        if let Some(location_id) = self.location_id {
            if row.location_id != location_id {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if row.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if row.date > end {
                return false;
            }
        }
        if let Some(threshold) = self.quality_threshold {
            if !row.quality.meets(threshold) {
                return false;
            }
        }
        true
    }

    pub fn matches_metric(&self, metric_name: &str) -> bool {
        self.metric.as_deref().map_or(true, |m| m == metric_name)
    }
}

/// Date ordering requested from the data-access layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingOrder {
    /// Storage order.
    #[default]
    Unordered,
    DateAscending,
    DateDescending,
}
