use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::QualityLevel;

// =========================================================
// Summary types + route
// =========================================================

/// Quality-weighted statistics for one metric.
///
/// `min`, `max`, `avg` and `weighted_avg` are rounded to 2 decimals.
/// `quality_distribution` holds the fraction of readings per grade present,
/// in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub weighted_avg: f64,
    pub unit: String,
    pub quality_distribution: IndexMap<QualityLevel, f64>,
}

/// Summary statistics keyed by metric name.
pub type SummaryData = IndexMap<String, SummaryResult>;
