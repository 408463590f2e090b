//! bookstore - a book catalog service
//!
//! Untyped request bodies are validated against declarative schemas
//! before they become typed books; books are persisted through an
//! injected relational store.

pub mod books;
pub mod cli;
pub mod http_server;
pub mod schema;
pub mod store;
