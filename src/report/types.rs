//! Report types and data structures.
//!
//! This module provides the records parsed out of the captured files
//! and the table shape they are rendered through.

use serde::{de, Deserialize};
use serde_json::{Map, Value};
use std::fmt;

/// A single resolved address, or whatever placeholder the capture holds.
///
/// Records carry no identity beyond their position: table rows keep
/// the order in which records appear in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRecord(pub String);

impl AddressRecord {
    /// Create a new address record.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AddressRecord {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One entry of a DoH `Answer` array.
///
/// Entries must be JSON objects. Only `data` is consumed; every other
/// field is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct DohAnswer {
    pub data: Option<Value>,
}

impl From<Map<String, Value>> for DohAnswer {
    fn from(mut entry: Map<String, Value>) -> Self {
        Self {
            data: entry.remove("data"),
        }
    }
}

impl DohAnswer {
    /// Convert the `data` field into a record.
    ///
    /// A missing or `null` value becomes an empty record; non-string
    /// values keep their JSON text.
    #[must_use]
    pub fn to_record(&self) -> AddressRecord {
        match &self.data {
            None | Some(Value::Null) => AddressRecord::default(),
            Some(Value::String(s)) => AddressRecord::new(s.as_str()),
            Some(other) => AddressRecord::new(other.to_string()),
        }
    }
}

/// A DoH JSON response.
///
/// The document must be a JSON object. A response without an `Answer`
/// key carries no records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AnswerSet {
    pub answers: Vec<DohAnswer>,
}

impl TryFrom<Map<String, Value>> for AnswerSet {
    type Error = serde_json::Error;

    fn try_from(mut root: Map<String, Value>) -> Result<Self, Self::Error> {
        let answers = match root.remove("Answer") {
            Some(answers) => serde_json::from_value(answers)?,
            None => Vec::new(),
        };
        Ok(Self { answers })
    }
}

impl AnswerSet {
    /// Records in answer order.
    #[must_use]
    pub fn records(&self) -> Vec<AddressRecord> {
        self.answers.iter().map(DohAnswer::to_record).collect()
    }
}

/// Raw ping results, e.g. `"time=10ms"` or `"time=N/A"`.
///
/// Entries 0..4 are IPv4 round-trip times and 4..8 are IPv6. The
/// document must be a JSON object with a `results` array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PingResultSet {
    pub results: Vec<String>,
}

impl TryFrom<Map<String, Value>> for PingResultSet {
    type Error = serde_json::Error;

    fn try_from(mut root: Map<String, Value>) -> Result<Self, Self::Error> {
        let results = root
            .remove("results")
            .ok_or_else(|| <serde_json::Error as de::Error>::missing_field("results"))?;
        Ok(Self {
            results: serde_json::from_value(results)?,
        })
    }
}

/// A rendered-once table: fixed headers and ordered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    ///
    /// Every row must have one value per header.
    pub fn new<H, R>(headers: &[H], rows: R) -> Self
    where
        H: AsRef<str>,
        R: IntoIterator<Item = Vec<String>>,
    {
        let headers: Vec<String> = headers.iter().map(|h| h.as_ref().to_string()).collect();
        let rows: Vec<Vec<String>> = rows.into_iter().collect();
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self { headers, rows }
    }

    /// Single `Address` column table, one row per record.
    #[must_use]
    pub fn addresses(records: Vec<AddressRecord>) -> Self {
        Self::new(&["Address"], records.into_iter().map(|r| vec![r.0]))
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::table::render(&self.headers, &self.rows))
    }
}
