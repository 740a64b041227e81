//! Metrics aggregation over extracted samples.
mod aggregate;
mod percentile;
mod summary;
mod types;
mod verdict;


pub use aggregate::{aggregate, summarize_parsed, verdict_from_parsed};
pub use summary::summarize;
pub use types::{MetricsSummary, Report, ReportMode, SuccessRate, Verdict};
pub use verdict::verdict;
