//! Query-parameter parsing shared by the listing and analytics routes.
//!
//! Parameters arrive as raw strings so that malformed values can be reported
//! with a precise message instead of a generic deserialization failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::climate::{DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::models::{LocationId, QualityLevel, ReadingFilter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rejected filter parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid location_id. Use an integer")]
    InvalidLocationId,
    #[error("Invalid start_date format. Use YYYY-MM-DD")]
    InvalidStartDate,
    #[error("Invalid end_date format. Use YYYY-MM-DD")]
    InvalidEndDate,
    #[error("Invalid quality_threshold. Use: poor, questionable, good, excellent")]
    InvalidQualityThreshold,
    /// Threshold rejection reported by the analytics routes, without the hint.
    #[error("Invalid quality_threshold")]
    UnknownQualityThreshold,
}

impl FilterError {
    /// Drop the accepted-values hint from a threshold rejection.
    pub fn terse(self) -> Self {
        match self {
            FilterError::InvalidQualityThreshold => FilterError::UnknownQualityThreshold,
            other => other,
        }
    }
}

/// Raw filter parameters: `location_id`, `start_date`, `end_date`,
/// `metric`, `quality_threshold`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub quality_threshold: Option<String>,
}

/// Present and non-empty.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_date(value: &str, err: FilterError) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| err)
}

impl FilterParams {
    /// Validate the parameters into a [`ReadingFilter`].
    ///
    /// `location_id=0` selects no location, like an absent parameter.
    pub fn parse(&self) -> Result<ReadingFilter, FilterError> {
        let mut filter = ReadingFilter::new();

        if let Some(raw) = non_empty(&self.location_id) {
            let id = raw
                .parse::<LocationId>()
                .map_err(|_| FilterError::InvalidLocationId)?;
            if id.value() != 0 {
                filter = filter.location(id);
            }
        }

        let start = non_empty(&self.start_date)
            .map(|raw| parse_date(raw, FilterError::InvalidStartDate))
            .transpose()?;
        let end = non_empty(&self.end_date)
            .map(|raw| parse_date(raw, FilterError::InvalidEndDate))
            .transpose()?;
        filter = filter.between(start, end);

        if let Some(metric) = non_empty(&self.metric) {
            filter = filter.metric(metric);
        }

        if let Some(raw) = non_empty(&self.quality_threshold) {
            let threshold = raw
                .parse::<QualityLevel>()
                .map_err(|_| FilterError::InvalidQualityThreshold)?;
            filter = filter.min_quality(threshold);
        }

        Ok(filter)
    }
}

/// Raw paging parameters for the climate listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub per_page: Option<String>,
}

impl PageParams {
    /// Resolve `(page, per_page)`.
    ///
    /// Non-integer values fall back to the defaults, values below 1 are
    /// clamped to 1 and `per_page` is capped at [`MAX_PER_PAGE`].
    pub fn resolve(&self) -> (u32, u32) {
        let parse = |raw: &Option<String>, default: u32| -> i64 {
            non_empty(raw)
                .and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(default as i64)
        };

        let page = parse(&self.page, 1).clamp(1, u32::MAX as i64) as u32;
        let per_page = parse(&self.per_page, DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE as i64) as u32;
        (page, per_page)
    }
}
