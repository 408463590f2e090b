//! Relational store abstraction
//!
//! The store is an injected collaborator: anything that can run a
//! parameterized SQL statement and hand back rows. Repositories hold an
//! `Arc<dyn Store>` so tests can swap in a private in-memory database.

mod errors;
mod sqlite;
mod value;

pub use errors::{StoreError, StoreResult};
pub use sqlite::{SqliteStore, IN_MEMORY};
pub use value::{Row, SqlValue};

/// Parameterized-SQL-capable store.
///
/// Parameters bind positionally (`?1`, `?2`, ...). Statements that
/// return nothing yield an empty row set.
pub trait Store: Send + Sync {
    fn execute(&self, sql: &str, params: &[SqlValue]) -> StoreResult<Vec<Row>>;
}
