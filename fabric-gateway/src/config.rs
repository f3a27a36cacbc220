//! Startup configuration, read once from flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fabric_executor::CliConfig;

/// Gateway settings. Every field can be set by flag or environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "fabric-gateway", version, about = "HTTP API for the Fabric CLI")]
pub struct GatewayConfig {
    /// Fabric configuration directory; patterns are read from `<dir>/patterns`.
    #[arg(long, env = "FABRIC_CONFIG_DIR", default_value = "/root/.config/fabric")]
    pub config_dir: PathBuf,

    /// Path to the `fabric` executable.
    #[arg(long, env = "FABRIC_BIN", default_value = "/usr/local/bin/fabric")]
    pub fabric_bin: PathBuf,

    #[arg(long, env = "MCP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "MCP_PORT", default_value_t = 8181)]
    pub port: u16,

    /// Seconds to wait for a single CLI invocation.
    #[arg(long, env = "FABRIC_TIMEOUT_SECS", default_value_t = 300)]
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// `host:port` for the TCP listener.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Executor settings derived from this config.
    #[must_use]
    pub fn cli_config(&self) -> CliConfig {
        CliConfig::new(self.fabric_bin.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GatewayConfig {
        let argv = std::iter::once("fabric-gateway").chain(args.iter().copied());
        match GatewayConfig::try_parse_from(argv) {
            Ok(c) => c,
            Err(e) => panic!("failed to parse args: {e}"),
        }
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--config-dir",
            "/srv/fabric",
            "--fabric-bin",
            "/opt/fabric",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--timeout-secs",
            "5",
        ]);
        assert_eq!(config.config_dir, PathBuf::from("/srv/fabric"));
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");

        let cli = config.cli_config();
        assert_eq!(cli.binary_path, PathBuf::from("/opt/fabric"));
        assert_eq!(cli.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let res = GatewayConfig::try_parse_from(["fabric-gateway", "--port", "not-a-port"]);
        assert!(res.is_err(), "non-numeric port must fail to parse");
    }
}
