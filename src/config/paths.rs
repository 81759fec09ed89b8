//! Input file locations.

use std::path::{Path, PathBuf};

/// IPv4 DNS-over-HTTPS capture.
pub const DOH4_FILE: &str = "doh4_output";
/// IPv6 DNS-over-HTTPS capture.
pub const DOH6_FILE: &str = "doh6_output";
/// IPv4 DNS-over-TLS address list.
pub const DOT4_FILE: &str = "dot";
/// IPv6 DNS-over-TLS address list.
pub const DOT6_FILE: &str = "dot6";
/// IPv4 plain DNS address list.
pub const DNS4_FILE: &str = "dns";
/// IPv6 plain DNS address list.
pub const DNS6_FILE: &str = "dns6";
/// Ping latency results.
pub const PING_FILE: &str = "ping_results.json";

/// Paths of every input the reporters read.
///
/// The default points at the fixed file names in the current working
/// directory. Tests use [`InputPaths::in_dir`] to point at a fixture directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub doh4: PathBuf,
    pub doh6: PathBuf,
    pub dot4: PathBuf,
    pub dot6: PathBuf,
    pub dns4: PathBuf,
    pub dns6: PathBuf,
    pub ping: PathBuf,
}

impl InputPaths {
    /// Resolve the fixed file names against `base`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let paths = InputPaths::in_dir("/tmp/capture");
    /// assert_eq!(paths.dot4, PathBuf::from("/tmp/capture/dot"));
    /// ```
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            doh4: base.join(DOH4_FILE),
            doh6: base.join(DOH6_FILE),
            dot4: base.join(DOT4_FILE),
            dot6: base.join(DOT6_FILE),
            dns4: base.join(DNS4_FILE),
            dns6: base.join(DNS6_FILE),
            ping: base.join(PING_FILE),
        }
    }
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            doh4: PathBuf::from(DOH4_FILE),
            doh6: PathBuf::from(DOH6_FILE),
            dot4: PathBuf::from(DOT4_FILE),
            dot6: PathBuf::from(DOT6_FILE),
            dns4: PathBuf::from(DNS4_FILE),
            dns6: PathBuf::from(DNS6_FILE),
            ping: PathBuf::from(PING_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_are_relative_names() {
        let paths = InputPaths::default();
        assert_eq!(paths.doh4, PathBuf::from("doh4_output"));
        assert_eq!(paths.doh6, PathBuf::from("doh6_output"));
        assert_eq!(paths.dot4, PathBuf::from("dot"));
        assert_eq!(paths.dot6, PathBuf::from("dot6"));
        assert_eq!(paths.dns4, PathBuf::from("dns"));
        assert_eq!(paths.dns6, PathBuf::from("dns6"));
        assert_eq!(paths.ping, PathBuf::from("ping_results.json"));
    }

    #[test]
    fn test_in_dir_joins_base() {
        let paths = InputPaths::in_dir("capture");
        assert_eq!(paths.dot6, Path::new("capture").join("dot6"));
        assert_eq!(paths.ping, Path::new("capture").join("ping_results.json"));
    }
}
