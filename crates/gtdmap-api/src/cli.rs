//! Command-line interface for the server binary.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ApiConfig, ENV_DATA_DIR, ENV_DEFAULT_ORG, ENV_HOST, ENV_PORT};

/// GTD Map - bucket views over your GTD work items
#[derive(Parser, Debug)]
#[command(name = "gtdmap-server")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Host to bind to
    #[arg(long, env = ENV_HOST)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to the item store
    #[arg(short, long, env = ENV_DATA_DIR)]
    pub data_dir: Option<PathBuf>,

    /// Organization used when a request names none
    #[arg(short, long, env = ENV_DEFAULT_ORG)]
    pub organization: Option<String>,
}

impl Cli {
    /// Applies the command-line overrides on top of `config`.
    pub fn apply(&self, mut config: ApiConfig) -> ApiConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        if let Some(org) = &self.organization {
            config = config.with_default_organization(org.as_str());
        }
        config
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_overrides() {
        let cli = Cli::parse_from([
            "gtdmap-server",
            "--host",
            "0.0.0.0",
            "--port",
            "9100",
            "--data-dir",
            "/srv/gtd",
            "--organization",
            "acme",
        ]);
        let config = cli.apply(ApiConfig::default());

        assert_eq!(config.bind_address(), "0.0.0.0:9100");
        assert_eq!(config.data_dir, PathBuf::from("/srv/gtd"));
        assert_eq!(config.default_organization.as_str(), "acme");
    }

    #[test]
    fn test_cli_without_args_keeps_config() {
        let cli = Cli {
            verbose: 0,
            host: None,
            port: None,
            data_dir: None,
            organization: None,
        };
        let config = cli.apply(ApiConfig::new("10.0.0.1", 4000));
        assert_eq!(config.bind_address(), "10.0.0.1:4000");
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["gtdmap-server", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }
}
