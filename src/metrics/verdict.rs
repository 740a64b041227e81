use crate::jtl::Sample;

use super::types::Verdict;

/// Passes when no sample failed.
///
/// An empty sequence passes: there is nothing that failed. Callers that
/// want "no data" to fail have to check `total_samples` themselves.
#[must_use]
pub fn verdict(samples: &[Sample]) -> Verdict {
    Verdict {
        test_passed: samples.iter().all(|sample| sample.success),
        total_samples: u64::try_from(samples.len()).unwrap_or(u64::MAX),
    }
}
