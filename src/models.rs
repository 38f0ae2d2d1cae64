//! Core data types flowing through the probing pipeline.

use serde::Deserialize;

use crate::config::UNSUPPORTED_PLACEHOLDER;

/// One input row: a ranked domain to probe.
///
/// Ranks come from the source list and are carried through to the output
/// verbatim; they are not required to be contiguous or start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainEntry {
    /// Position of the entry in the source list.
    pub rank: u32,
    /// Domain name to probe. Assumed well-formed; not validated here.
    pub domain: String,
}

/// Outcome of probing one domain. Exactly one exists per [`DomainEntry`].
///
/// When `supported` is false, every numeric field is 0 and every string
/// field holds a fixed placeholder, so consumers always see a fully
/// populated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Rank copied from the originating entry.
    pub rank: u32,
    /// Domain copied from the originating entry.
    pub domain: String,
    /// True iff an RRSIG record was found in the resolver's answer.
    pub supported: bool,
    /// Type covered by the signature (e.g. "A").
    pub record_type: String,
    /// DNSSEC algorithm identifier.
    pub algorithm: i64,
    /// Number of labels in the signed owner name.
    pub label_count: i64,
    /// Original TTL of the signed record set, in seconds.
    pub original_ttl: i64,
    /// Signature expiration timestamp, as encoded in the resolver's text.
    pub signature_expiration: i64,
    /// Signature inception timestamp, same encoding.
    pub signature_inception: i64,
    /// Key tag of the signing key.
    pub key_tag: i64,
    /// Name of the zone that signed the record set.
    pub signer_name: String,
}

impl ProbeResult {
    /// Builds the "no signature found" result for an entry, with all
    /// fields at their sentinel values.
    pub fn unsupported(entry: &DomainEntry) -> Self {
        Self {
            rank: entry.rank,
            domain: entry.domain.clone(),
            supported: false,
            record_type: UNSUPPORTED_PLACEHOLDER.to_string(),
            algorithm: 0,
            label_count: 0,
            original_ttl: 0,
            signature_expiration: 0,
            signature_inception: 0,
            key_tag: 0,
            signer_name: UNSUPPORTED_PLACEHOLDER.to_string(),
        }
    }
}
