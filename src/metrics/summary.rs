use crate::jtl::Sample;

use super::percentile::percentile_floor;
use super::types::{MetricsSummary, SuccessRate};

/// Percentile reported in the summary.
const PERCENTILE_P90: u64 = 90;
/// A success ratio scaled to hundredths of a percent.
const RATIO_TO_HUNDREDTHS: u128 = 10_000;
const MILLIS_PER_SECOND: i128 = 1_000;

/// Computes the full metrics summary for a sample sequence.
///
/// Pure function of its input: the same slice always yields the same
/// summary.
#[must_use]
pub fn summarize(samples: &[Sample]) -> MetricsSummary {
    let total = u64::try_from(samples.len()).unwrap_or(u64::MAX);
    if total == 0 {
        return MetricsSummary::zero();
    }

    let mut failed: u64 = 0;
    let mut total_time: u128 = 0;
    let mut min_time = u64::MAX;
    let mut max_time: u64 = 0;
    let mut times = Vec::with_capacity(samples.len());

    for sample in samples {
        if !sample.success {
            failed = failed.saturating_add(1);
        }
        total_time = total_time.saturating_add(u128::from(sample.elapsed_ms));
        min_time = min_time.min(sample.elapsed_ms);
        max_time = max_time.max(sample.elapsed_ms);
        times.push(sample.elapsed_ms);
    }
    times.sort_unstable();

    let passed = total.saturating_sub(failed);

    MetricsSummary {
        total_requests: total,
        failed_requests: failed,
        success_rate: success_rate(passed, total),
        avg_response_time: average_ms(total_time, total),
        min_time,
        max_time,
        percentile_90: percentile_floor(&times, PERCENTILE_P90),
        duration_seconds: duration_seconds(samples),
    }
}

/// Rounds `numerator / denominator` half up; 0 for a zero denominator.
fn div_round_half_up(numerator: u128, denominator: u128) -> u128 {
    numerator
        .saturating_mul(2)
        .saturating_add(denominator)
        .checked_div(denominator.saturating_mul(2))
        .unwrap_or(0)
}

fn average_ms(total_time: u128, total: u64) -> u64 {
    let average = div_round_half_up(total_time, u128::from(total));
    u64::try_from(average).unwrap_or(u64::MAX)
}

fn success_rate(passed: u64, total: u64) -> SuccessRate {
    let scaled = u128::from(passed).saturating_mul(RATIO_TO_HUNDREDTHS);
    let hundredths = div_round_half_up(scaled, u128::from(total));
    SuccessRate::from_hundredths(u64::try_from(hundredths).unwrap_or(u64::MAX))
}

/// Seconds between the first and last sample in log order, rounded half
/// toward positive infinity. Not clamped: an inverted log gives a negative
/// duration.
fn duration_seconds(samples: &[Sample]) -> i64 {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return 0;
    };
    let delta_ms = i128::from(last.timestamp_ms).saturating_sub(i128::from(first.timestamp_ms));
    let seconds = delta_ms
        .saturating_mul(2)
        .saturating_add(MILLIS_PER_SECOND)
        .checked_div_euclid(MILLIS_PER_SECOND.saturating_mul(2))
        .unwrap_or(0);
    i64::try_from(seconds).unwrap_or(if seconds.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
