//! CLI argument definitions using clap
//!
//! Commands:
//! - collection-api [serve]
//! - collection-api seed [--force]
//!
//! Server options are global and may also come from the environment.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::ServerConfig;

use super::errors::CliResult;

/// Collection API - a JSON-file backed media tracking service
#[derive(Parser, Debug)]
#[command(name = "collection-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: ServerOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,

    /// Write the seed collection to the data file
    Seed {
        /// Replace the collection even if it already holds enough records
        #[arg(long)]
        force: bool,
    },
}

/// Overrides applied on top of the config file
#[derive(Args, Debug, Clone, Default)]
pub struct ServerOptions {
    /// Path to a JSON configuration file
    #[arg(long, env = "COLLECTION_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long, env = "HOST", global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT", global = true)]
    pub port: Option<u16>,

    /// JSON file holding the records
    #[arg(long, env = "COLLECTION_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Only accept the known record types and statuses
    #[arg(long, env = "COLLECTION_STRICT", global = true)]
    pub strict_categories: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to run, defaulting to `serve`
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

impl ServerOptions {
    /// Resolve the effective server configuration.
    ///
    /// Starts from the config file (or defaults) and applies every option
    /// that was given on the command line or in the environment.
    pub fn resolve(&self) -> CliResult<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if self.strict_categories {
            config.strict_categories = true;
        }

        config.validate()?;
        Ok(config)
    }
}
