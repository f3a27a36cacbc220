//! CLI invocation settings.

use std::path::PathBuf;
use std::time::Duration;

/// Wait ceiling for a single invocation: 300 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Where the CLI lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct CliConfig {
    /// Path to the `fabric` binary.
    pub binary_path: PathBuf,

    /// Maximum time to wait for the process to exit.
    pub timeout: Duration,
}

impl CliConfig {
    /// Config for `binary_path` with the default timeout.
    #[must_use]
    pub fn new(binary_path: impl Into<PathBuf>) -> Self {
        Self { binary_path: binary_path.into(), timeout: DEFAULT_TIMEOUT }
    }

    /// Replace the wait ceiling.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_five_minute_ceiling() {
        let config = CliConfig::new("/usr/local/bin/fabric");
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert_eq!(config.binary_path, PathBuf::from("/usr/local/bin/fabric"));
    }

    #[test]
    fn with_timeout_overrides_ceiling() {
        let config = CliConfig::new("fabric").with_timeout(Duration::from_millis(50));
        assert_eq!(config.timeout, Duration::from_millis(50));
    }
}
