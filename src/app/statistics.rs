//! Summary statistics over a completed result set.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProbeStats};
use crate::models::ProbeResult;

/// Aggregate statistics for one survey run.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyStats {
    /// Count of all submitted domains.
    pub total: usize,
    /// Count of domains whose answer carried an RRSIG record.
    pub supported: usize,
    /// `supported / total * 100`; defined as 0 for an empty input.
    pub support_rate_percent: f64,
}

/// Computes the summary statistics once, after full collection.
pub fn compute_stats(results: &[ProbeResult]) -> SurveyStats {
    let total = results.len();
    let supported = results.iter().filter(|r| r.supported).count();
    let support_rate_percent = if total == 0 {
        // Zero-domain input is a degenerate case: report 0%, never NaN.
        0.0
    } else {
        supported as f64 / total as f64 * 100.0
    };
    SurveyStats {
        total,
        supported,
        support_rate_percent,
    }
}

/// Logs the final one-line summary.
pub fn print_summary(stats: &SurveyStats) {
    info!(
        "Total: {}, supported: {} ({}%)",
        stats.total, stats.supported, stats.support_rate_percent
    );
}

/// Logs the soft-failure counters accumulated while probing, if any.
pub fn print_error_statistics(probe_stats: &ProbeStats) {
    let total = probe_stats.total();
    if total == 0 {
        return;
    }
    info!("Probe error counts ({} total):", total);
    for error_type in ErrorType::iter() {
        let count = probe_stats.get_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DomainEntry;

    fn result(rank: u32, supported: bool) -> ProbeResult {
        let entry = DomainEntry {
            rank,
            domain: format!("domain{rank}.example"),
        };
        let mut r = ProbeResult::unsupported(&entry);
        r.supported = supported;
        r
    }

    #[test]
    fn test_zero_domains_is_zero_percent() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.supported, 0);
        assert_eq!(stats.support_rate_percent, 0.0);
        assert!(!stats.support_rate_percent.is_nan());
    }

    #[test]
    fn test_one_of_three_supported() {
        let results = [result(1, true), result(2, false), result(3, false)];
        let stats = compute_stats(&results);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.supported, 1);
        assert!((stats.support_rate_percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_supported_is_one_hundred_percent() {
        let results = [result(1, true), result(2, true)];
        let stats = compute_stats(&results);
        assert_eq!(stats.support_rate_percent, 100.0);
    }
}
