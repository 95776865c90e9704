#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::{QualityLevel, Reading};
    use crate::services::summary::{compute_summary, quality_distribution, summarize_metric};

    fn create_reading(metric: &str, day: u32, value: f64, quality: QualityLevel) -> Reading {
        let unit = if metric == "temperature" { "celsius" } else { "mm" };
        Reading::new(
            metric,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            value,
            quality,
            unit,
        )
    }

    #[test]
    fn test_compute_summary_empty() {
        let summary = compute_summary(&[]);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_huge_values_stay_finite() {
        let readings = vec![
            create_reading("temperature", 1, 1e307, QualityLevel::Good),
            create_reading("temperature", 2, 1e307, QualityLevel::Good),
        ];
        let summary = compute_summary(&readings);
        let temperature = &summary["temperature"];

        assert_eq!(temperature.min, 1e307);
        assert_eq!(temperature.max, 1e307);
        assert_eq!(temperature.avg, 1e307);
        assert!(temperature.weighted_avg.is_finite());

        let json = serde_json::to_value(temperature).unwrap();
        assert!(json["min"].is_number());
        assert!(json["weighted_avg"].is_number());
    }

    #[test]
    fn test_uniform_excellent_scenario() {
        let readings: Vec<Reading> = [10.0, 10.0, 10.0, 20.0, 20.0, 20.0]
            .iter()
            .enumerate()
            .map(|(i, v)| create_reading("temperature", i as u32 + 1, *v, QualityLevel::Excellent))
            .collect();

        let summary = compute_summary(&readings);
        let temperature = &summary["temperature"];

        assert_eq!(temperature.min, 10.0);
        assert_eq!(temperature.max, 20.0);
        assert_eq!(temperature.avg, 15.0);
        assert_eq!(temperature.weighted_avg, 15.0);
        assert_eq!(temperature.unit, "celsius");
        assert_eq!(temperature.quality_distribution.len(), 1);
        assert_eq!(
            temperature.quality_distribution[&QualityLevel::Excellent],
            1.0
        );
    }

    #[test]
    fn test_weighted_average_favours_high_quality() {
        let readings = vec![
            create_reading("precipitation", 1, 10.0, QualityLevel::Excellent),
            create_reading("precipitation", 2, 20.0, QualityLevel::Poor),
        ];

        let summary = compute_summary(&readings);
        let precipitation = &summary["precipitation"];

        assert_eq!(precipitation.avg, 15.0);
        // (10*1.0 + 20*0.3) / 1.3 = 12.307...
        assert_eq!(precipitation.weighted_avg, 12.31);
        assert!(precipitation.weighted_avg < precipitation.avg);
    }

    #[test]
    fn test_multiple_metrics_in_first_seen_order() {
        let readings = vec![
            create_reading("precipitation", 1, 3.0, QualityLevel::Good),
            create_reading("temperature", 1, 21.5, QualityLevel::Good),
            create_reading("precipitation", 2, 5.0, QualityLevel::Questionable),
        ];

        let summary = compute_summary(&readings);
        let metrics: Vec<&String> = summary.keys().collect();
        assert_eq!(metrics, vec!["precipitation", "temperature"]);

        assert_eq!(summary["precipitation"].min, 3.0);
        assert_eq!(summary["precipitation"].max, 5.0);
        assert_eq!(summary["temperature"].avg, 21.5);
        assert_eq!(summary["temperature"].unit, "celsius");
    }

    #[test]
    fn test_quality_distribution_fractions() {
        let readings = [
            create_reading("temperature", 1, 1.0, QualityLevel::Good),
            create_reading("temperature", 2, 2.0, QualityLevel::Poor),
            create_reading("temperature", 3, 3.0, QualityLevel::Good),
            create_reading("temperature", 4, 4.0, QualityLevel::Excellent),
        ];
        let group: Vec<&Reading> = readings.iter().collect();
        let distribution = quality_distribution(&group);

        assert_eq!(distribution[&QualityLevel::Good], 0.5);
        assert_eq!(distribution[&QualityLevel::Poor], 0.25);
        assert_eq!(distribution[&QualityLevel::Excellent], 0.25);
        assert!(!distribution.contains_key(&QualityLevel::Questionable));
        let total: f64 = distribution.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let readings = vec![
            create_reading("temperature", 1, 1.111, QualityLevel::Good),
            create_reading("temperature", 2, 2.226, QualityLevel::Good),
        ];

        let summary = compute_summary(&readings);
        let temperature = &summary["temperature"];
        assert_eq!(temperature.min, 1.11);
        assert_eq!(temperature.max, 2.23);
    }

    #[test]
    fn test_single_reading() {
        let readings = [create_reading("temperature", 1, -3.5, QualityLevel::Questionable)];
        let group: Vec<&Reading> = readings.iter().collect();
        let result = summarize_metric(&group).unwrap();

        assert_eq!(result.min, -3.5);
        assert_eq!(result.max, -3.5);
        assert_eq!(result.avg, -3.5);
        assert_eq!(result.weighted_avg, -3.5);
    }

    #[test]
    fn test_summarize_empty_group() {
        assert!(summarize_metric(&[]).is_none());
    }
}
