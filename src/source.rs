//! Input domain list reading.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::DomainEntry;

/// Reads the ranked domain list from a headerless CSV file.
///
/// Each row is `rank,domain`; extra columns are ignored. Read failures
/// and malformed rows are fatal: proceeding with a partial list would
/// silently skew the survey statistics.
pub fn read_domains(path: &Path) -> Result<Vec<DomainEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let mut entries = Vec::new();
    for (index, row) in reader.deserialize::<DomainEntry>().enumerate() {
        let entry = row.with_context(|| {
            format!("Failed to parse row {} of {}", index + 1, path.display())
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write input");
        file
    }

    #[test]
    fn test_reads_ranked_domains() {
        let file = write_input("1,example.com\n2,example.net\n50,example.org\n");
        let entries = read_domains(file.path()).expect("should parse");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].domain, "example.com");
        // Ranks are preserved verbatim, contiguous or not.
        assert_eq!(entries[2].rank, 50);
        assert_eq!(entries[2].domain, "example.org");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_input("1,example.com,ignored\n");
        let entries = read_domains(file.path()).expect("should parse");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].domain, "example.com");
    }

    #[test]
    fn test_non_integer_rank_is_fatal() {
        let file = write_input("one,example.com\n");
        let err = read_domains(file.path()).expect_err("rank must be an integer");
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = read_domains(Path::new("/nonexistent/domains.csv"))
            .expect_err("missing input must fail");
        assert!(err.to_string().contains("Failed to open input file"));
    }

    #[test]
    fn test_empty_file_yields_no_entries() {
        let file = write_input("");
        let entries = read_domains(file.path()).expect("empty input is valid");
        assert!(entries.is_empty());
    }
}
