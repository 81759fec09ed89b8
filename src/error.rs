//! Error types module.
//!
//! This module defines the error types used throughout dnsreport.
//! It uses `thiserror` for structured error handling and provides
//! a custom `Result` type alias for convenience.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A specialized `Result` type for dnsreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for dnsreport.
///
/// Every variant is fatal to the report that raised it. Whether it is also
/// fatal to the whole run is decided by the runner.
#[derive(Debug, Error)]
pub enum Error {
    /// A named input file does not exist
    #[error("input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// I/O error other than a missing file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON input could not be parsed or lacks the expected shape
    #[error("malformed JSON in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The ping `results` sequence holds neither 4 nor 8 entries
    #[error("malformed ping results: expected 4 or 8 entries, found {0}")]
    MalformedPingResults(usize),

    /// One or more reports failed while running in keep-going mode
    #[error("{0} report(s) failed")]
    ReportsFailed(usize),
}

impl Error {
    /// Classify a read failure for `path`.
    ///
    /// `NotFound` becomes [`Error::MissingFile`], everything else stays an I/O error.
    #[must_use]
    pub fn read(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::MissingFile(path.as_ref().to_path_buf())
        } else {
            Self::Io(err)
        }
    }

    /// Attach the offending path to a JSON error.
    #[must_use]
    pub fn malformed_json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::MalformedJson {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
