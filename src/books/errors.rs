//! Book operation errors

use thiserror::Error;

use crate::schema::ValidationError;
use crate::store::StoreError;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

#[derive(Debug, Clone, Error)]
pub enum BookError {
    /// Payload failed its schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No book with this isbn
    #[error("There is no book with an isbn '{0}'")]
    NotFound(String),

    /// A book with this isbn already exists
    #[error("Book with isbn '{0}' already exists")]
    Conflict(String),

    /// Store or connectivity failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
