//! Results table writing.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::models::ProbeResult;

/// Column headers of the output table, in order.
pub const OUTPUT_HEADER: [&str; 11] = [
    "Rank",
    "Domain",
    "DNSSEC",
    "RecordType",
    "Algorithm",
    "Label",
    "TTL",
    "EndTime",
    "StartTime",
    "KeyTag",
    "Signer",
];

/// Writes the aggregated results to a CSV file, one row per probe, in the
/// original input order.
///
/// Integers are written as decimal text and booleans as `true`/`false`.
/// Write failures are fatal.
pub fn write_results(path: &Path, results: &[ProbeResult]) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    writer.write_record(OUTPUT_HEADER)?;
    for r in results {
        writer.write_record(&[
            r.rank.to_string(),
            r.domain.clone(),
            r.supported.to_string(),
            r.record_type.clone(),
            r.algorithm.to_string(),
            r.label_count.to_string(),
            r.original_ttl.to_string(),
            r.signature_expiration.to_string(),
            r.signature_inception.to_string(),
            r.key_tag.to_string(),
            r.signer_name.clone(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {}", path.display()))?;
    Ok(())
}
