/// Divisor for percentile ranks expressed in whole percent.
const PERCENT_DIVISOR: u64 = 100;

/// Order statistic at `floor(len * percentile / 100)` of an ascending slice.
///
/// No interpolation; an index past the end (only possible for an empty
/// slice) yields 0.
pub(super) fn percentile_floor(sorted: &[u64], percentile: u64) -> u64 {
    let count = u64::try_from(sorted.len()).unwrap_or(u64::MAX);
    let index = count
        .saturating_mul(percentile)
        .checked_div(PERCENT_DIVISOR)
        .unwrap_or(0);
    usize::try_from(index)
        .ok()
        .and_then(|idx| sorted.get(idx))
        .copied()
        .unwrap_or(0)
}
