//! Data Transfer Objects for the HTTP API.
//!
//! Response payloads are the serializable route types re-exported here;
//! this module adds the request-side query types and the health response.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Catalog
    Location, Metric,
    // Climate listing
    ClimatePage, ClimateRecord, PageMeta,
    // Filters
    FilterError, FilterParams, PageParams,
    // Summary
    SummaryData, SummaryResult,
    // Trends
    Anomaly, Seasonality, TrendInfo, TrendResult, TrendsData,
    // Envelope
    DataEnvelope,
};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `connected`, `disconnected` or `error: ...`
    pub database: String,
}

/// `{"data": [...]}` listing of locations.
pub type LocationListResponse = DataEnvelope<Vec<Location>>;

/// `{"data": [...]}` listing of metrics.
pub type MetricListResponse = DataEnvelope<Vec<Metric>>;

/// `{"data": {metric: summary}}`
pub type SummaryResponse = DataEnvelope<SummaryData>;

/// `{"data": {metric: trend}}`
pub type TrendsResponse = DataEnvelope<TrendsData>;
