//! Report score classification for badges.

use std::fmt;

use serde::Serialize;

/// Badge bucket: `low < 60 ≤ medium < 75 ≤ good < 90 ≤ excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Medium,
    Good,
    Excellent,
}

impl ScoreBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Low => "low",
            ScoreBand::Medium => "medium",
            ScoreBand::Good => "good",
            ScoreBand::Excellent => "excellent",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a score. Total over `i32`: out-of-range values fall into the
/// outermost buckets.
pub fn classify(score: i32) -> ScoreBand {
    match score {
        90.. => ScoreBand::Excellent,
        75..=89 => ScoreBand::Good,
        60..=74 => ScoreBand::Medium,
        _ => ScoreBand::Low,
    }
}

/// Lowest and highest score a report may carry.
pub const SCORE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;
