//! Ping latency reporter.
//!
//! The capture holds eight `time=<value>` strings: four IPv4 round trips
//! followed by four IPv6 round trips. A capture with only four entries is
//! IPv4-only and gets a column of `N/A` for IPv6.

use crate::config::{InputLoader, InputPaths};
use crate::error::{Error, Result};
use crate::report::types::{PingResultSet, Table};

/// Prefix carried by every raw ping result.
pub const TIME_PREFIX: &str = "time=";

/// Placeholder appended for missing IPv6 results.
pub const NOT_APPLICABLE: &str = "time=N/A";

/// Rows in the ping table, one per probe.
pub const PROBES: usize = 4;

/// Bring a result sequence to exactly eight entries.
///
/// Four entries are padded with four [`NOT_APPLICABLE`] placeholders;
/// eight entries are returned unchanged.
///
/// # Errors
///
/// Returns [`Error::MalformedPingResults`] for any other length.
pub fn pad_results(mut results: Vec<String>) -> Result<Vec<String>> {
    match results.len() {
        PROBES => {
            results.resize(PROBES * 2, NOT_APPLICABLE.to_string());
            Ok(results)
        }
        n if n == PROBES * 2 => Ok(results),
        n => Err(Error::MalformedPingResults(n)),
    }
}

/// Strip a leading `time=`; values without it are returned as is.
#[must_use]
pub fn strip_time_prefix(raw: &str) -> &str {
    raw.strip_prefix(TIME_PREFIX).unwrap_or(raw)
}

/// Build the `IPv4`/`IPv6` table from a parsed result set.
///
/// Row `i` pairs `results[i]` with `results[i + 4]`.
///
/// # Errors
///
/// Returns [`Error::MalformedPingResults`] if the set holds neither 4 nor
/// 8 entries.
pub fn build_table(set: PingResultSet) -> Result<Table> {
    let results = pad_results(set.results)?;
    let (ipv4, ipv6) = results.split_at(PROBES);
    let rows = ipv4.iter().zip(ipv6).map(|(v4, v6)| {
        vec![
            strip_time_prefix(v4).to_string(),
            strip_time_prefix(v6).to_string(),
        ]
    });
    Ok(Table::new(&["IPv4", "IPv6"], rows))
}

/// Load the ping capture and build the table.
///
/// # Errors
///
/// Returns [`Error::MissingFile`], [`Error::MalformedJson`] or
/// [`Error::MalformedPingResults`].
pub fn build(paths: &InputPaths) -> Result<Table> {
    let set: PingResultSet = InputLoader::load_json(&paths.ping)?;
    if set.results.len() == PROBES {
        tracing::debug!("ping results are IPv4 only, padding IPv6 column");
    }
    build_table(set)
}
