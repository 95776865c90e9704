//! Shared helpers for the analytics components: per-metric grouping,
//! quality weighting and the small set of statistics both components use.

use indexmap::IndexMap;

use crate::models::Reading;

/// Group readings by metric name.
///
/// Metrics appear in first-seen order and each group keeps the arrival
/// order of its readings, so a date-ascending input stays date-ascending
/// within every group.
pub fn group_by_metric(readings: &[Reading]) -> IndexMap<&str, Vec<&Reading>> {
    let mut groups: IndexMap<&str, Vec<&Reading>> = IndexMap::new();
    for reading in readings {
        groups.entry(reading.metric.as_str()).or_default().push(reading);
    }
    groups
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (Bessel's correction, `n - 1`).
///
/// Returns `None` for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let sum_sq = values
        .iter()
        .map(|v| {
            let diff = v - m;
            diff * diff
        })
        .sum::<f64>();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// `Σ(value·weight) / Σ(weight)` using the fixed quality weights.
///
/// A zero weight sum yields 0. Every grade has a positive weight, so this
/// only triggers for an empty group.
pub fn weighted_mean(group: &[&Reading]) -> f64 {
    let (weighted_sum, weight_sum) = group.iter().fold((0.0, 0.0), |(ws, w), r| {
        let weight = r.weight();
        (ws + r.value * weight, w + weight)
    });
    if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    }
}

/// Round to `decimals` places, halves away from zero.
///
/// Values too large to carry a fractional part at that precision are
/// returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() || value.abs() >= 2f64.powi(52) / factor {
        return value;
    }
    scaled.round() / factor
}
