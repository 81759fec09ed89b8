//! Line-list reporter shared by the DoT and plain DNS reports.
//!
//! Each input is a newline-delimited list of addresses. Every line,
//! trimmed, becomes one record; empty lines are kept as empty rows.

use crate::config::InputLoader;
use crate::error::Result;
use crate::report::types::{AddressRecord, Table};
use std::path::Path;

/// Split text into trimmed records, one per line.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. A trailing line ending
/// does not produce an extra record, but blank lines anywhere else do.
#[must_use]
pub fn parse_lines(text: &str) -> Vec<AddressRecord> {
    let mut records = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let end = rest.find(|c: char| c == '\r' || c == '\n').unwrap_or(rest.len());
        records.push(AddressRecord::new(rest[..end].trim()));

        let tail = &rest[end..];
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix('\r'))
            .or_else(|| tail.strip_prefix('\n'))
            .unwrap_or(tail);
    }

    records
}

/// Load an IPv4 and an IPv6 address list and build the table.
///
/// # Errors
///
/// Returns [`crate::Error::MissingFile`] if either list is missing.
pub fn build(ipv4: &Path, ipv6: &Path) -> Result<Table> {
    let ipv4_text = InputLoader::load_text(ipv4)?;
    let ipv6_text = InputLoader::load_text(ipv6)?;

    let mut records = parse_lines(&ipv4_text);
    let ipv4_count = records.len();
    records.extend(parse_lines(&ipv6_text));
    tracing::debug!(
        ipv4 = ipv4_count,
        ipv6 = records.len() - ipv4_count,
        "parsed address lists"
    );

    Ok(Table::addresses(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(records: &[AddressRecord]) -> Vec<&str> {
        records.iter().map(AddressRecord::as_str).collect()
    }

    #[test]
    fn test_parse_lines_trims() {
        let records = parse_lines("  8.8.8.8 \n\t8.8.4.4\r\n");
        assert_eq!(values(&records), vec!["8.8.8.8", "8.8.4.4"]);
    }

    #[test]
    fn test_parse_lines_keeps_blank_lines() {
        let records = parse_lines("1.1.1.1\n\n   \n1.0.0.1");
        assert_eq!(values(&records), vec!["1.1.1.1", "", "", "1.0.0.1"]);
    }

    #[test]
    fn test_parse_lines_no_phantom_trailing_record() {
        assert_eq!(parse_lines("8.8.8.8\n").len(), 1);
        assert_eq!(parse_lines("8.8.8.8\n\n").len(), 2);
        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn test_parse_lines_bare_carriage_return_ends_line() {
        let records = parse_lines("1.1.1.1\r2.2.2.2\n");
        assert_eq!(values(&records), vec!["1.1.1.1", "2.2.2.2"]);

        assert_eq!(values(&parse_lines("a\r\n\r\n")), vec!["a", ""]);
        assert_eq!(values(&parse_lines("a\r\rb\r")), vec!["a", "", "b"]);
        assert_eq!(values(&parse_lines("\r")), vec![""]);
    }

    #[test]
    fn test_build_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let v4 = dir.path().join("dot");
        let v6 = dir.path().join("dot6");
        std::fs::write(&v4, "8.8.8.8\n8.8.4.4\n").unwrap();
        std::fs::write(&v6, "2001:4860::1\n").unwrap();

        let table = build(&v4, &v6).unwrap();
        let cells: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(cells, vec!["8.8.8.8", "8.8.4.4", "2001:4860::1"]);
    }

    #[test]
    fn test_build_missing_ipv6_list() {
        let dir = tempfile::tempdir().unwrap();
        let v4 = dir.path().join("dns");
        std::fs::write(&v4, "9.9.9.9\n").unwrap();

        let err = build(&v4, &dir.path().join("dns6")).unwrap_err();
        assert!(matches!(err, crate::Error::MissingFile(_)));
    }
}
