//! Trend direction, anomaly detection and seasonality per metric.
//!
//! These are simple, deterministic heuristics:
//! - the trend compares the mean of the first half of the readings with the
//!   mean of the second half, using a ±5% band around the first half;
//! - anomalies are readings more than two sample standard deviations away
//!   from the metric mean;
//! - seasonality is a fixed threshold on the number of readings.
//!
//! None of them is a forecast or a statistical test.

use log::debug;

use super::grouping::{group_by_metric, mean, round_to, sample_std_dev};
use crate::api::{
    Anomaly, Coordinates, ReadingFilter, ReadingOrder, Seasonality, SeasonalityPeriod,
    TrendDirection, TrendInfo, TrendResult, TrendsData,
};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::Reading;

/// Relative band around the first-half mean inside which a trend is stable.
pub const STABLE_BAND: f64 = 0.05;

/// Groups need at least this many readings to get a trend.
pub const MIN_TREND_READINGS: usize = 2;

/// Anomaly detection runs only for groups larger than this.
pub const ANOMALY_MIN_EXCLUSIVE: usize = 3;

/// Distance from the mean, in standard deviations, beyond which a reading is anomalous.
pub const ANOMALY_SIGMA: f64 = 2.0;

/// At most this many anomalies are reported per metric.
pub const MAX_ANOMALIES: usize = 5;

/// Seasonality is flagged for groups larger than this.
pub const SEASONALITY_MIN_EXCLUSIVE: usize = 8;

const BASE_CONFIDENCE: f64 = 0.4;
const QUALITY_CONFIDENCE_SPAN: f64 = 0.5;
const MAX_CONFIDENCE: f64 = 0.95;

/// Means of `[0, n/2)` and `[n/2, n)`.
///
/// An empty first half (only possible for `n < 2`) averages to 0.
pub(crate) fn half_means(values: &[f64]) -> (f64, f64) {
    let mid = values.len() / 2;
    let first = if mid > 0 { mean(&values[..mid]) } else { 0.0 };
    let second = mean(&values[mid..]);
    (first, second)
}

/// Direction and per-reading rate from the two half means.
pub(crate) fn classify_trend(first: f64, second: f64, n: usize) -> (TrendDirection, f64) {
    if second > first * (1.0 + STABLE_BAND) {
        (
            TrendDirection::Increasing,
            round_to((second - first) / n as f64, 4),
        )
    } else if second < first * (1.0 - STABLE_BAND) {
        (
            TrendDirection::Decreasing,
            round_to((first - second) / n as f64, 4),
        )
    } else {
        (TrendDirection::Stable, 0.0)
    }
}

/// Confidence from the share of excellent/good readings, capped at 0.95.
pub(crate) fn compute_confidence(group: &[&Reading]) -> f64 {
    if group.is_empty() {
        return BASE_CONFIDENCE;
    }
    let high_quality = group.iter().filter(|r| r.quality.is_high_quality()).count();
    let share = high_quality as f64 / group.len() as f64;
    round_to(
        (BASE_CONFIDENCE + share * QUALITY_CONFIDENCE_SPAN).min(MAX_CONFIDENCE),
        2,
    )
}

/// Readings further than two sample standard deviations from the mean,
/// in group order, truncated to [`MAX_ANOMALIES`].
pub(crate) fn detect_anomalies(group: &[&Reading]) -> Vec<Anomaly> {
    if group.len() <= ANOMALY_MIN_EXCLUSIVE {
        return Vec::new();
    }

    let values: Vec<f64> = group.iter().map(|r| r.value).collect();
    let center = mean(&values);
    let std_dev = match sample_std_dev(&values) {
        Some(sd) if sd > 0.0 => sd,
        _ => return Vec::new(),
    };

    group
        .iter()
        .filter_map(|reading| {
            let deviation = (reading.value - center).abs();
            if deviation <= ANOMALY_SIGMA * std_dev {
                return None;
            }
            let location = reading.location.as_ref();
            Some(Anomaly {
                date: reading.date,
                value: round_to(reading.value, 2),
                deviation: round_to(deviation / std_dev, 1),
                quality: reading.quality,
                location: location.map(|l| l.name.clone()),
                location_id: location.map(|l| l.id),
                coordinates: location.map(|l| Coordinates {
                    latitude: l.latitude,
                    longitude: l.longitude,
                }),
            })
        })
        .take(MAX_ANOMALIES)
        .collect()
}

/// Fixed-threshold seasonality flag.
pub(crate) fn detect_seasonality(n: usize) -> Seasonality {
    if n > SEASONALITY_MIN_EXCLUSIVE {
        Seasonality {
            detected: true,
            period: SeasonalityPeriod::Monthly,
            confidence: 0.6,
        }
    } else {
        Seasonality {
            detected: false,
            period: SeasonalityPeriod::InsufficientData,
            confidence: 0.1,
        }
    }
}

/// Analyze one date-ascending metric group. `None` below two readings.
pub(crate) fn analyze_metric(group: &[&Reading]) -> Option<TrendResult> {
    let n = group.len();
    if n < MIN_TREND_READINGS {
        return None;
    }

    let values: Vec<f64> = group.iter().map(|r| r.value).collect();
    let (first, second) = half_means(&values);
    let (direction, rate) = classify_trend(first, second, n);

    Some(TrendResult {
        trend: TrendInfo {
            direction,
            rate,
            unit: format!("{}/period", group[0].unit),
            confidence: compute_confidence(group),
        },
        anomalies: detect_anomalies(group),
        seasonality: detect_seasonality(n),
    })
}

/// Compute trend results for every metric with at least two readings.
///
/// `readings` must be ordered by date ascending within each metric; the
/// order is taken as given.
pub fn compute_trends(readings: &[Reading]) -> TrendsData {
    group_by_metric(readings)
        .into_iter()
        .filter_map(|(metric, group)| {
            analyze_metric(&group).map(|result| (metric.to_string(), result))
        })
        .collect()
}

/// Fetch the filtered readings in date order and analyze them.
pub async fn get_trends_data<R: FullRepository + ?Sized>(
    repo: &R,
    filter: &ReadingFilter,
) -> RepositoryResult<TrendsData> {
    let readings = repo
        .fetch_readings(filter, ReadingOrder::DateAscending)
        .await?;
    let trends = compute_trends(&readings);
    debug!(
        "Analyzed trends for {} metrics from {} readings",
        trends.len(),
        readings.len()
    );
    Ok(trends)
}
