//! dnsreport - Render captured network diagnostics as text tables.
//!
//! This crate reads pre-generated diagnostic output from the local
//! filesystem and prints one bordered table per report:
//! - **DOH results**: `Answer[].data` of the IPv4 and IPv6 DNS-over-HTTPS captures
//! - **DOT results**: the DNS-over-TLS address lists
//! - **DNS results**: the plain DNS address lists
//! - **Ping results**: IPv4 and IPv6 round-trip times side by side
//!
//! No network traffic is generated; the captures are produced elsewhere.
//!
//! # Library Usage
//!
//! ```ignore
//! use dnsreport::{InputPaths, Runner};
//!
//! let runner = Runner::new(InputPaths::in_dir("capture"));
//! runner.run(&mut std::io::stdout().lock())?;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Render every report from the current directory
//! dnsreport
//!
//! # Do not let one bad capture hide the other reports
//! dnsreport --keep-going
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{InputLoader, InputPaths};
pub use error::{Error, Result};
pub use report::types::{AddressRecord, AnswerSet, PingResultSet, Table};
pub use report::{Report, ReportKind, RunSummary, Runner};
