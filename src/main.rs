//! dnsreport - diagnostic capture renderer
//!
//! Binary entry point for the dnsreport CLI application.

#![warn(clippy::all, warnings)]
#![warn(clippy::pedantic, clippy::nursery)]

use dnsreport::config::InputPaths;
use dnsreport::report::Runner;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging based on verbosity level.
///
/// Logs go to stderr so stdout only carries the tables.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `quiet` - Enable error-level only logging
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Main entry point for the dnsreport CLI application.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = dnsreport::cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    tracing::debug!("dnsreport starting...");

    let runner = Runner::new(InputPaths::default()).keep_going(cli.keep_going);
    let summary = runner.run(&mut std::io::stdout().lock())?;
    tracing::debug!(rendered = summary.rendered.len(), "done");

    Ok(())
}
