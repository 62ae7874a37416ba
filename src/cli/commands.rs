//! CLI command implementations

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::http_server::{HttpServer, ServerConfig};
use crate::store::{Collection, JsonFileStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "collection_api=info,tower_http=info";

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();

    let config = cli.options.resolve()?;
    run_command(cli.command(), config)
}

/// Run a command against a resolved configuration
pub fn run_command(command: Command, config: ServerConfig) -> CliResult<()> {
    match command {
        Command::Serve => serve(config),
        Command::Seed { force } => {
            let count = seed(&config, force)?;
            println!("{} records in {}", count, config.data_file.display());
            Ok(())
        }
    }
}

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Serve the record API until the process is stopped
pub fn serve(config: ServerConfig) -> CliResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    info!(
        host = %config.host,
        port = config.port,
        data_file = %config.data_file.display(),
        "starting collection API"
    );

    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Make sure the data file holds a usable collection.
///
/// Without `force` this only seeds when the file holds too few records.
/// Returns the number of records now stored.
pub fn seed(config: &ServerConfig, force: bool) -> CliResult<usize> {
    let collection = Collection::new(Arc::new(JsonFileStore::new(config.data_file.clone())));

    let records = if force {
        info!(data_file = %config.data_file.display(), "reseeding record collection");
        collection.reseed()?
    } else {
        collection.load()?
    };

    Ok(records.len())
}
