use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize, Serializer};

/// Hundredths in one whole percent.
const HUNDREDTHS_PER_PERCENT: u64 = 100;

/// Success percentage kept as integer hundredths and rendered with exactly
/// two decimals (`66.67`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SuccessRate {
    hundredths: u64,
}

impl SuccessRate {
    pub const ZERO: Self = Self { hundredths: 0 };

    #[must_use]
    pub const fn from_hundredths(hundredths: u64) -> Self {
        Self { hundredths }
    }

    #[must_use]
    pub const fn hundredths(self) -> u64 {
        self.hundredths
    }
}

impl fmt::Display for SuccessRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.hundredths / HUNDREDTHS_PER_PERCENT,
            self.hundredths % HUNDREDTHS_PER_PERCENT
        )
    }
}

impl Serialize for SuccessRate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total_requests: u64,
    pub failed_requests: u64,
    pub success_rate: SuccessRate,
    pub avg_response_time: u64,
    pub min_time: u64,
    pub max_time: u64,
    pub percentile_90: u64,
    pub duration_seconds: i64,
}

impl MetricsSummary {
    /// Neutral summary used when the results log could not be parsed.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_requests: 0,
            failed_requests: 0,
            success_rate: SuccessRate::ZERO,
            avg_response_time: 0,
            min_time: 0,
            max_time: 0,
            percentile_90: 0,
            duration_seconds: 0,
        }
    }

    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed_requests == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub test_passed: bool,
    pub total_samples: u64,
}

impl Verdict {
    /// Verdict used when the results log could not be parsed.
    #[must_use]
    pub const fn failed_closed() -> Self {
        Self {
            test_passed: false,
            total_samples: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// Counts, rates, percentile and duration.
    #[default]
    Full,
    /// Only whether any sample failed.
    PassFail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Metrics(MetricsSummary),
    Verdict(Verdict),
}

impl Report {
    #[must_use]
    pub const fn passed(&self) -> bool {
        match self {
            Report::Metrics(summary) => summary.all_passed(),
            Report::Verdict(verdict) => verdict.test_passed,
        }
    }
}
