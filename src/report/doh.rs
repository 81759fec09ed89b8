//! DNS-over-HTTPS reporter.
//!
//! Reads the IPv4 and IPv6 DoH JSON captures and lists every
//! `Answer[].data` value, IPv4 answers first.

use crate::config::{InputLoader, InputPaths};
use crate::error::{Error, Result};
use crate::report::types::{AddressRecord, AnswerSet, Table};
use std::path::Path;

/// Parse one DoH JSON document into records, in answer order.
///
/// # Errors
///
/// Fails if the document is not a JSON object or `Answer` is not an
/// array of objects.
pub fn parse_answers(json: &str) -> serde_json::Result<Vec<AddressRecord>> {
    let set: AnswerSet = serde_json::from_str(json)?;
    Ok(set.records())
}

fn load_answers(path: &Path) -> Result<Vec<AddressRecord>> {
    let content = InputLoader::load_text(path)?;
    let records = parse_answers(&content).map_err(|e| Error::malformed_json(path, e))?;
    tracing::debug!(path = %path.display(), answers = records.len(), "parsed DoH answers");
    Ok(records)
}

/// Concatenate IPv4 then IPv6 records into an `Address` table.
#[must_use]
pub fn build_table(ipv4: Vec<AddressRecord>, ipv6: Vec<AddressRecord>) -> Table {
    let mut records = ipv4;
    records.extend(ipv6);
    Table::addresses(records)
}

/// Load both DoH captures and build the table.
///
/// Both documents are parsed before any row is built, so a malformed
/// capture yields no table at all.
///
/// # Errors
///
/// Returns [`crate::Error::MissingFile`] or [`crate::Error::MalformedJson`].
pub fn build(paths: &InputPaths) -> Result<Table> {
    let ipv6 = load_answers(&paths.doh6)?;
    let ipv4 = load_answers(&paths.doh4)?;
    Ok(build_table(ipv4, ipv6))
}
