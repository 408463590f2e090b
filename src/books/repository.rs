//! Book repository
//!
//! Maps books to rows of the `books` table through an injected `Store`.
//! Existence and uniqueness are decided by the store, not checked ahead
//! of time: update and delete use `RETURNING` to learn whether a row
//! matched.

use std::sync::Arc;

use tracing::{debug, info};

use crate::store::{Row, SqlValue, Store, StoreError};

use super::errors::{BookError, BookResult};
use super::model::{Book, BookPatch, NewBook};

const COLUMNS: &str = "isbn, amazon_url, author, language, pages, publisher, title, year";

#[derive(Clone)]
pub struct BookRepository {
    store: Arc<dyn Store>,
}

impl BookRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Returns every book. Order is not part of the contract.
    pub fn list(&self) -> BookResult<Vec<Book>> {
        let sql = format!("SELECT {COLUMNS} FROM books ORDER BY isbn");
        let rows = self.store.execute(&sql, &[])?;
        let books = rows
            .iter()
            .map(Book::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = books.len(), "listed books");
        Ok(books)
    }

    pub fn create(&self, book: NewBook) -> BookResult<Book> {
        let isbn = book.isbn.clone();
        let sql = format!(
            "INSERT INTO books ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING {COLUMNS}"
        );
        let rows = self
            .store
            .execute(&sql, &book.into_params())
            .map_err(|e| match e {
                StoreError::UniqueViolation(_) => BookError::Conflict(isbn.clone()),
                other => BookError::Store(other),
            })?;

        let created = single(rows.first(), &isbn)?;
        info!(isbn = %created.isbn, "created book");
        Ok(created)
    }

    pub fn get_by_isbn(&self, isbn: &str) -> BookResult<Book> {
        let sql = format!("SELECT {COLUMNS} FROM books WHERE isbn = ?1");
        let rows = self.store.execute(&sql, &[isbn.into()])?;
        single(rows.first(), isbn)
    }

    /// Replaces only the fields present in `patch`. An empty patch
    /// returns the current row unchanged.
    pub fn update(&self, isbn: &str, patch: BookPatch) -> BookResult<Book> {
        let assignments = patch.assignments();
        if assignments.is_empty() {
            return self.get_by_isbn(isbn);
        }

        let set_clause = assignments
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE books SET {set_clause} WHERE isbn = ?{} RETURNING {COLUMNS}",
            assignments.len() + 1
        );

        let mut params: Vec<SqlValue> = assignments.into_iter().map(|(_, v)| v).collect();
        params.push(isbn.into());

        let rows = self.store.execute(&sql, &params)?;
        let updated = single(rows.first(), isbn)?;
        info!(isbn, "updated book");
        Ok(updated)
    }

    pub fn delete_by_isbn(&self, isbn: &str) -> BookResult<()> {
        let rows = self
            .store
            .execute("DELETE FROM books WHERE isbn = ?1 RETURNING isbn", &[isbn.into()])?;
        if rows.is_empty() {
            return Err(BookError::NotFound(isbn.to_string()));
        }
        info!(isbn, "deleted book");
        Ok(())
    }
}

fn single(row: Option<&Row>, isbn: &str) -> BookResult<Book> {
    match row {
        Some(row) => Ok(Book::from_row(row)?),
        None => Err(BookError::NotFound(isbn.to_string())),
    }
}
