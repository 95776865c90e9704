//! Quality-weighted summary statistics per metric.

use indexmap::IndexMap;
use log::debug;

use super::grouping::{group_by_metric, mean, round_to, weighted_mean};
use crate::api::{ReadingFilter, ReadingOrder, SummaryData, SummaryResult};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{QualityLevel, Reading};

/// Fraction of readings per grade, in first-seen order.
pub(crate) fn quality_distribution(group: &[&Reading]) -> IndexMap<QualityLevel, f64> {
    let mut counts: IndexMap<QualityLevel, usize> = IndexMap::new();
    for reading in group {
        *counts.entry(reading.quality).or_insert(0) += 1;
    }

    let total = group.len() as f64;
    counts
        .into_iter()
        .map(|(quality, count)| (quality, count as f64 / total))
        .collect()
}

/// Summarize one metric group. `None` for an empty group.
pub(crate) fn summarize_metric(group: &[&Reading]) -> Option<SummaryResult> {
    let first = group.first()?;

    let values: Vec<f64> = group.iter().map(|r| r.value).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(SummaryResult {
        min: round_to(min, 2),
        max: round_to(max, 2),
        avg: round_to(mean(&values), 2),
        weighted_avg: round_to(weighted_mean(group), 2),
        unit: first.unit.clone(),
        quality_distribution: quality_distribution(group),
    })
}

/// Compute summary statistics for every metric present in `readings`.
///
/// Input order does not matter. Metrics without readings are absent from
/// the result and an empty input yields an empty map.
pub fn compute_summary(readings: &[Reading]) -> SummaryData {
    group_by_metric(readings)
        .into_iter()
        .filter_map(|(metric, group)| {
            summarize_metric(&group).map(|summary| (metric.to_string(), summary))
        })
        .collect()
}

/// Fetch the filtered readings and summarize them.
pub async fn get_summary_data<R: FullRepository + ?Sized>(
    repo: &R,
    filter: &ReadingFilter,
) -> RepositoryResult<SummaryData> {
    let readings = repo.fetch_readings(filter, ReadingOrder::Unordered).await?;
    let summary = compute_summary(&readings);
    debug!(
        "Summarized {} readings into {} metrics",
        readings.len(),
        summary.len()
    );
    Ok(summary)
}
