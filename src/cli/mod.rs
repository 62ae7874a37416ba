//! CLI module for the collection API
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server (default)
//! - seed: Write the seed collection to the data file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServerOptions};
pub use commands::{init_tracing, run, run_command, seed, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
