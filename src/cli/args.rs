//! CLI argument definitions using clap
//!
//! Commands:
//! - bookstore serve --config <path> [--port <port>] [--log-format text|json]
//! - bookstore migrate --config <path>

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bookstore - a book catalog service
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the books table (if needed) and start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bookstore.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Log output format
        #[arg(long, value_enum, default_value_t = LogFormat::Text)]
        log_format: LogFormat,
    },

    /// Create the books table and exit
    Migrate {
        /// Path to configuration file
        #[arg(long, default_value = "./bookstore.json")]
        config: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
