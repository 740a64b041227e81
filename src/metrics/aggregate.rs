use crate::error::JtlError;
use crate::jtl::Sample;

use super::summary::summarize;
use super::types::{MetricsSummary, Report, ReportMode, Verdict};
use super::verdict::verdict;

/// Full metrics for a parse result. A parse failure degrades to the
/// all-zero summary.
#[must_use]
pub fn summarize_parsed(parsed: &Result<Vec<Sample>, JtlError>) -> MetricsSummary {
    match parsed {
        Ok(samples) => summarize(samples),
        Err(err) => {
            tracing::warn!("Results log could not be parsed, reporting zero metrics: {}", err);
            MetricsSummary::zero()
        }
    }
}

/// Pass/fail verdict for a parse result. A parse failure is a failed run.
#[must_use]
pub fn verdict_from_parsed(parsed: &Result<Vec<Sample>, JtlError>) -> Verdict {
    match parsed {
        Ok(samples) => verdict(samples),
        Err(err) => {
            tracing::warn!("Results log could not be parsed, reporting a failed run: {}", err);
            Verdict::failed_closed()
        }
    }
}

#[must_use]
pub fn aggregate(mode: ReportMode, parsed: &Result<Vec<Sample>, JtlError>) -> Report {
    match mode {
        ReportMode::Full => Report::Metrics(summarize_parsed(parsed)),
        ReportMode::PassFail => Report::Verdict(verdict_from_parsed(parsed)),
    }
}
