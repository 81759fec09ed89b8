//! Report module.
//!
//! This module turns the captured diagnostic files into tables:
//! - DoH answer sets
//! - DoT and plain DNS address lists
//! - Ping latency results
//!
//! Reports are built and printed one at a time, always in the order
//! DOH, DOT, DNS, Ping.

pub mod doh;
pub mod lines;
pub mod ping;
pub mod runner;
pub mod table;
pub mod types;

pub use runner::{RunSummary, Runner};
pub use types::*;

use crate::config::InputPaths;
use crate::error::Result;
use std::fmt;
use std::io::Write;

/// The four reports, each with a fixed title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Doh,
    Dot,
    Dns,
    Ping,
}

impl ReportKind {
    /// Every report, in print order.
    pub const ALL: [Self; 4] = [Self::Doh, Self::Dot, Self::Dns, Self::Ping];

    /// Title line printed above the table.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Doh => "DOH results",
            Self::Dot => "DOT results",
            Self::Dns => "DNS results",
            Self::Ping => "Ping results",
        }
    }

    /// Read this report's inputs and build its table.
    ///
    /// # Errors
    ///
    /// Returns the first error met while loading or parsing the inputs.
    pub fn build(self, paths: &InputPaths) -> Result<Report> {
        let table = match self {
            Self::Doh => doh::build(paths)?,
            Self::Dot => lines::build(&paths.dot4, &paths.dot6)?,
            Self::Dns => lines::build(&paths.dns4, &paths.dns6)?,
            Self::Ping => ping::build(paths)?,
        };
        Ok(Report { kind: self, table })
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doh => write!(f, "doh"),
            Self::Dot => write!(f, "dot"),
            Self::Dns => write!(f, "dns"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

/// A built report, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub table: Table,
}

impl Report {
    /// Write a blank separator line, the title, then the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", self.kind.title())?;
        writeln!(writer, "{}", self.table)?;
        Ok(())
    }
}
