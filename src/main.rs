//! Collection API entry point
//!
//! Parses arguments and hands off to the CLI module. Errors are printed to
//! stderr and end the process with exit code 1.

use collection_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
