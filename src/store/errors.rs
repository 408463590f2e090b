//! Store error types

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Insert or update collided with a primary key or unique index
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Any other engine failure
    #[error("store db error: {0}")]
    Database(String),

    /// Column absent from a result row
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Column present with an unexpected type
    #[error("column '{column}' expected {expected}, got {actual}")]
    ColumnType {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Column storage class not representable as a `SqlValue`
    #[error("unsupported column type: {0}")]
    UnsupportedColumn(&'static str),

    /// A previous holder of the connection panicked
    #[error("store connection poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn column_type(column: &str, expected: &'static str, actual: &'static str) -> Self {
        StoreError::ColumnType {
            column: column.to_string(),
            expected,
            actual,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation
                    && (failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                        || failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE) =>
            {
                StoreError::UniqueViolation(
                    message.clone().unwrap_or_else(|| failure.to_string()),
                )
            }
            _ => StoreError::Database(err.to_string()),
        }
    }
}
