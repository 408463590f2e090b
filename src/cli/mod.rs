//! CLI module for the bookstore
//!
//! Provides command-line interface for:
//! - serve: Migrate the store and serve HTTP
//! - migrate: Create the books table and exit

mod args;
mod commands;
mod config;
mod errors;
mod logging;

pub use args::{Cli, Command, LogFormat};
pub use commands::{migrate, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use logging::init_logging;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
