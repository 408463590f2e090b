//! SQLite-backed store
//!
//! One connection, guarded by a mutex. Key uniqueness and row existence
//! are enforced by the database itself (primary key, `RETURNING`).

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{params_from_iter, Connection, OpenFlags};
use tracing::{debug, info};

use super::errors::{StoreError, StoreResult};
use super::value::{Row, SqlValue};
use super::Store;

/// Default busy timeout for file-backed databases
const BUSY_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Path value that selects an in-memory database
pub const IN_MEMORY: &str = ":memory:";

const MIGRATIONS: &str = "
CREATE TABLE IF NOT EXISTS books (
    isbn       TEXT PRIMARY KEY NOT NULL,
    amazon_url TEXT,
    author     TEXT NOT NULL,
    language   TEXT,
    pages      INTEGER,
    publisher  TEXT,
    title      TEXT NOT NULL,
    year       INTEGER
);
";

pub struct SqliteStore {
    connection: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) a database file. `:memory:` opens a private
    /// in-memory database.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if path == Path::new(IN_MEMORY) {
            return Self::open_in_memory();
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
        let connection = Connection::open_with_flags(path, flags)?;
        let journal_mode: String =
            connection.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        connection.busy_timeout(BUSY_TIMEOUT)?;

        info!(path = %path.display(), journal_mode = %journal_mode, "opened sqlite store");
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Opens a private in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        let connection = Connection::open_in_memory()?;
        debug!("opened in-memory sqlite store");
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Creates the `books` table if it does not exist. Idempotent.
    pub fn migrate(&self) -> StoreResult<()> {
        let connection = self.connection.lock().map_err(|_| StoreError::Poisoned)?;
        connection.execute_batch(MIGRATIONS)?;
        info!("store schema up to date");
        Ok(())
    }
}

impl Store for SqliteStore {
    fn execute(&self, sql: &str, params: &[SqlValue]) -> StoreResult<Vec<Row>> {
        debug!(sql, params = params.len(), "executing statement");

        let connection = self.connection.lock().map_err(|_| StoreError::Poisoned)?;
        let mut statement = connection.prepare(sql)?;
        let names: Vec<String> = statement
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = statement.query(params_from_iter(params.iter()))?;
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let mut columns = Vec::with_capacity(names.len());
            for (index, name) in names.iter().enumerate() {
                let value: rusqlite::types::Value = row.get(index)?;
                columns.push((name.clone(), SqlValue::try_from(value)?));
            }
            result.push(Row::new(columns));
        }
        Ok(result)
    }
}
