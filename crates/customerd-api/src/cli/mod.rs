//! Command-line definitions for the `customerd` binary.
//!
//! Uses clap derive macros for argument parsing. Every listen/storage flag
//! also reads from an environment variable and overrides the config file.

use std::path::PathBuf;

use clap::Parser;
use customerd_infra::config::DEFAULT_CONFIG_FILE;
use customerd_types::config::ServiceConfig;

/// Serve the customer CRUD API over HTTP.
#[derive(Debug, Parser)]
#[command(name = "customerd", version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults).
    #[arg(long, env = "CUSTOMERD_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Interface to bind to.
    #[arg(long, env = "CUSTOMERD_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "CUSTOMERD_PORT")]
    pub port: Option<u16>,

    /// sqlx SQLite URL, e.g. `sqlite://customers.db?mode=rwc`.
    #[arg(long, env = "CUSTOMERD_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long)]
    pub otel: bool,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Layer command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = &self.database_url {
            config.database_url = url.clone();
        }
        config
    }
}
