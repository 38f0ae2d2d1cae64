//! RRSIG record detection in raw resolver answer text.
//!
//! The resolver's answer is a loosely structured zone-format dump; this
//! module finds the first line shaped like an RRSIG resource record and
//! extracts its fields as strings. Purely a format extractor: no
//! cryptographic validation happens here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches one RRSIG answer line:
/// `<owner> <ttl> IN RRSIG <type> <alg> <labels> <orig-ttl> <exp> <inc> <key-tag> <signer> <sig...>`.
/// Owner and signer are dot-separated lowercase labels (punycode `xn--`
/// included) ending in a TLD-like suffix.
static RRSIG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^(?:(?:xn--)?[a-z0-9]+(?:-[a-z0-9]+)*\.)+[a-z]{2,}\.\s+\d+\s+IN\s+RRSIG\s+(\w+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s+((?:[a-z0-9_-]+\.)+[a-z]{2,}\.)\s+",
    )
    .expect("RRSIG line pattern is valid")
});

/// The RRSIG-specific fields of a matched record, uncoerced.
///
/// All fields are kept as captured strings; numeric coercion is the
/// caller's concern (and is allowed to fail softly there).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RrsigFields {
    /// Record type covered by the signature (e.g. "A").
    pub type_covered: String,
    /// DNSSEC algorithm identifier.
    pub algorithm: String,
    /// Label count of the signed owner name.
    pub labels: String,
    /// Original TTL of the signed record set.
    pub original_ttl: String,
    /// Signature expiration timestamp.
    pub expiration: String,
    /// Signature inception timestamp.
    pub inception: String,
    /// Key tag of the signing key.
    pub key_tag: String,
    /// Signer (zone) name.
    pub signer_name: String,
}

/// Extracts the first RRSIG record from raw answer text.
///
/// Only the first matching occurrence is used; multiple signature records
/// in one answer are not aggregated. Partial or malformed lines simply do
/// not match and yield `None`.
pub fn parse_rrsig(answer: &str) -> Option<RrsigFields> {
    let caps = RRSIG_LINE.captures(answer)?;
    Some(RrsigFields {
        type_covered: caps[1].to_string(),
        algorithm: caps[2].to_string(),
        labels: caps[3].to_string(),
        original_ttl: caps[4].to_string(),
        expiration: caps[5].to_string(),
        inception: caps[6].to_string(),
        key_tag: caps[7].to_string(),
        signer_name: caps[8].to_string(),
    })
}
