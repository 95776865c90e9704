//! Data-quality grades attached to every climate reading.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reliability grade of a single measurement.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Poor < Questionable < Good < Excellent`, which is the ordering used by
/// `quality_threshold` filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Poor,
    Questionable,
    Good,
    Excellent,
}

impl QualityLevel {
    /// All grades, lowest first.
    pub const ALL: [QualityLevel; 4] = [
        QualityLevel::Poor,
        QualityLevel::Questionable,
        QualityLevel::Good,
        QualityLevel::Excellent,
    ];

    /// Fixed weight used by the quality-weighted average.
    pub const fn weight(self) -> f64 {
        match self {
            QualityLevel::Excellent => 1.0,
            QualityLevel::Good => 0.8,
            QualityLevel::Questionable => 0.5,
            QualityLevel::Poor => 0.3,
        }
    }

    /// Excellent and good readings count towards trend confidence.
    pub const fn is_high_quality(self) -> bool {
        matches!(self, QualityLevel::Excellent | QualityLevel::Good)
    }

    /// True when this grade passes a "at least `threshold`" filter.
    pub fn meets(self, threshold: QualityLevel) -> bool {
        self >= threshold
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Poor => "poor",
            QualityLevel::Questionable => "questionable",
            QualityLevel::Good => "good",
            QualityLevel::Excellent => "excellent",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poor" => Ok(QualityLevel::Poor),
            "questionable" => Ok(QualityLevel::Questionable),
            "good" => Ok(QualityLevel::Good),
            "excellent" => Ok(QualityLevel::Excellent),
            other => Err(format!("Unknown quality level: {}", other)),
        }
    }
}
