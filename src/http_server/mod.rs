//! # Book Catalog HTTP Server Module
//!
//! JSON over HTTP. Handlers validate untyped bodies, call the book
//! repository, and map outcomes to status codes.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - List and create
//! - `/books/:isbn` - Get, update and delete by isbn

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod extract;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorMessage, ErrorResponse};
pub use extract::UnknownBody;
pub use server::HttpServer;
