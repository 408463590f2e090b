//! CLI command implementations
//!
//! Boot sequence for `serve`: load config, init logging, open store,
//! migrate, serve. `migrate` stops after the migration.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::books::BookRepository;
use crate::http_server::HttpServer;
use crate::store::SqliteStore;

use super::args::{Command, LogFormat};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::logging::init_logging;

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            port,
            log_format,
        } => serve(&config, port, log_format),
        Command::Migrate { config } => migrate(&config),
    }
}

/// Open the configured store and make sure the books table exists
fn open_store(config: &Config) -> CliResult<SqliteStore> {
    let store = SqliteStore::open(&config.database_path)?;
    store.migrate()?;
    Ok(store)
}

pub fn migrate(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    init_logging(LogFormat::Text, &config.log_filter);

    open_store(&config)?;
    info!(database = %config.database_path, "migration complete");
    Ok(())
}

pub fn serve(config_path: &Path, port: Option<u16>, log_format: LogFormat) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    init_logging(log_format, &config.log_filter);

    let store = open_store(&config)?;
    let repository = BookRepository::new(Arc::new(store));
    let server = HttpServer::new(config.http.clone(), repository);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::serve_error(format!("Failed to start runtime: {}", e)))?;

    info!(database = %config.database_path, addr = %server.socket_addr(), "starting server");
    runtime.block_on(server.start())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_migrate_creates_database() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("books.db");
        let config_path = dir.path().join("bookstore.json");
        fs::write(
            &config_path,
            format!(r#"{{"database_path": {:?}}}"#, db_path.display().to_string()),
        )
        .unwrap();

        migrate(&config_path).unwrap();
        assert!(db_path.exists());

        let store = SqliteStore::open(&db_path).unwrap();
        assert!(store.execute("SELECT isbn FROM books", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_migrate_rejects_bad_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bookstore.json");
        fs::write(&config_path, "[]").unwrap();
        assert!(migrate(&config_path).is_err());
    }
}
