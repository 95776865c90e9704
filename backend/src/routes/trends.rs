use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{LocationId, QualityLevel};

// =========================================================
// Trends types + route
// =========================================================

/// Direction of the two-halves comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Trend direction, per-reading rate and data-quality confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInfo {
    pub direction: TrendDirection,
    pub rate: f64,
    /// `"{unit}/period"`
    pub unit: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A reading more than two sample standard deviations from its metric mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub date: NaiveDate,
    pub value: f64,
    /// Distance from the mean in standard deviations.
    pub deviation: f64,
    pub quality: QualityLevel,
    pub location: Option<String>,
    pub location_id: Option<LocationId>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalityPeriod {
    Monthly,
    InsufficientData,
}

/// Fixed-threshold seasonality flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seasonality {
    pub detected: bool,
    pub period: SeasonalityPeriod,
    pub confidence: f64,
}

/// Trend, anomalies and seasonality for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub trend: TrendInfo,
    pub anomalies: Vec<Anomaly>,
    pub seasonality: Seasonality,
}

/// Trend results keyed by metric name.
pub type TrendsData = IndexMap<String, TrendResult>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        assert_eq!(
            serde_json::to_string(&TrendDirection::Increasing).unwrap(),
            "\"increasing\""
        );
        assert_eq!(
            serde_json::to_string(&TrendDirection::Stable).unwrap(),
            "\"stable\""
        );
    }

    #[test]
    fn test_period_serialization() {
        assert_eq!(
            serde_json::to_string(&SeasonalityPeriod::InsufficientData).unwrap(),
            "\"insufficient_data\""
        );
        assert_eq!(
            serde_json::to_string(&SeasonalityPeriod::Monthly).unwrap(),
            "\"monthly\""
        );
    }

    #[test]
    fn test_anomaly_shape() {
        let anomaly = Anomaly {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            value: 100.0,
            deviation: 2.7,
            quality: QualityLevel::Good,
            location: Some("Irvine".to_string()),
            location_id: Some(LocationId(1)),
            coordinates: Some(Coordinates {
                latitude: 33.68,
                longitude: -117.83,
            }),
        };
        let value = serde_json::to_value(&anomaly).unwrap();
        assert_eq!(value["date"], "2024-06-01");
        assert_eq!(value["location_id"], 1);
        assert_eq!(value["coordinates"]["latitude"], 33.68);
    }
}
