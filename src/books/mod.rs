//! Book entity, payload schemas and repository

mod errors;
mod model;
mod repository;
pub mod schema;

pub use errors::{BookError, BookResult};
pub use model::{Book, BookPatch, NewBook};
pub use repository::BookRepository;
