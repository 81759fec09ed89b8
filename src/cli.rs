//! Command-line interface (CLI) argument parsing module.
//!
//! The renderer takes no positional arguments: inputs are always read
//! from their fixed names in the working directory. Flags only control
//! logging and failure isolation.

use clap::Parser;

/// CLI argument parser using clap derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "dnsreport",
    version,
    about = "Render captured DoH, DoT, DNS and ping results as tables",
    long_about = "Reads doh4_output, doh6_output, dot, dot6, dns, dns6 and \
                  ping_results.json from the current directory and prints one \
                  table per report."
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Keep rendering the remaining reports when one of them fails
    #[arg(short = 'k', long)]
    pub keep_going: bool,
}

/// Parse CLI arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dnsreport"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.keep_going);
    }

    #[test]
    fn test_keep_going_flag() {
        let cli = Cli::try_parse_from(["dnsreport", "--keep-going", "-v"]).unwrap();
        assert!(cli.keep_going);
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["dnsreport", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_rejects_positional_paths() {
        assert!(Cli::try_parse_from(["dnsreport", "some/dir"]).is_err());
    }
}
