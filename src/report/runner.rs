//! Sequential report runner.

use crate::config::InputPaths;
use crate::error::{Error, Result};
use crate::report::ReportKind;
use std::io::Write;

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Reports written to the output
    pub rendered: Vec<ReportKind>,
    /// Reports skipped after a failure (keep-going mode only)
    pub failed: Vec<ReportKind>,
}

/// Builds and prints every report in [`ReportKind::ALL`] order.
///
/// By default the first failure aborts the run; reports already printed
/// stay printed and later ones are never attempted. With
/// [`Runner::keep_going`] each report is isolated instead: a failure is
/// logged and the remaining reports still run.
///
/// # Example
///
/// ```ignore
/// let runner = Runner::new(InputPaths::default());
/// runner.run(&mut std::io::stdout().lock())?;
/// ```
#[derive(Debug, Clone)]
pub struct Runner {
    paths: InputPaths,
    keep_going: bool,
}

impl Runner {
    #[must_use]
    pub fn new(paths: InputPaths) -> Self {
        Self {
            paths,
            keep_going: false,
        }
    }

    /// Isolate reports from each other's failures.
    #[must_use]
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Run every report, writing each one as soon as it is built.
    ///
    /// # Errors
    ///
    /// Without keep-going, returns the first report error. With it,
    /// returns [`Error::ReportsFailed`] once all reports have been tried
    /// if any of them failed. Writer errors are always fatal.
    pub fn run<W: Write>(&self, writer: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for kind in ReportKind::ALL {
            match kind.build(&self.paths) {
                Ok(report) => {
                    report.write_to(writer)?;
                    tracing::info!(report = %kind, rows = report.table.len(), "rendered report");
                    summary.rendered.push(kind);
                }
                Err(e) if self.keep_going => {
                    tracing::error!(report = %kind, "report failed: {e}");
                    summary.failed.push(kind);
                }
                Err(e) => return Err(e),
            }
        }
        writer.flush()?;

        if summary.failed.is_empty() {
            Ok(summary)
        } else {
            Err(Error::ReportsFailed(summary.failed.len()))
        }
    }
}
