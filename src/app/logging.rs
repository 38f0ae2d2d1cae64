//! Progress logging utilities.

use log::info;

use crate::models::ProbeResult;

/// Logs one progress line as a result arrives at the aggregator.
///
/// `received` counts arrivals, so lines are numbered in completion order,
/// not submission order.
pub fn log_progress(received: usize, result: &ProbeResult) {
    info!(
        "Processed domain #{} {}, DNSSEC: {}, RecordType: {}, Algorithm: {}, Label: {}, \
         TTL: {}, EndTime: {}, StartTime: {}, KeyTag: {}, Signer: {}",
        received,
        result.domain,
        result.supported,
        result.record_type,
        result.algorithm,
        result.label_count,
        result.original_ttl,
        result.signature_expiration,
        result.signature_inception,
        result.key_tag,
        result.signer_name
    );
}
