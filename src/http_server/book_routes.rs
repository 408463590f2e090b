//! Book HTTP Routes
//!
//! Receive → Validate → (reject | Execute) → Respond, one handler per verb.
//! Validation failures never reach the repository.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::books::{Book, BookPatch, BookRepository, NewBook};

use super::errors::{route_not_found, ApiResult};
use super::extract::UnknownBody;

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub repository: BookRepository,
}

impl BookState {
    pub fn new(repository: BookRepository) -> Self {
        Self { repository }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub book: Book,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Book Routes
// ==================

/// Create book routes. Both `/books` and `/books/` are served.
/// An unsupported method on a known path is answered like an unknown path.
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route(
            "/books",
            get(list_books).post(create_book).fallback(route_not_found),
        )
        .route(
            "/books/",
            get(list_books).post(create_book).fallback(route_not_found),
        )
        .route(
            "/books/:isbn",
            get(get_book)
                .put(update_book)
                .delete(delete_book)
                .fallback(route_not_found),
        )
        .with_state(state)
}

async fn list_books(State(state): State<Arc<BookState>>) -> ApiResult<Json<BooksResponse>> {
    let books = state.repository.list()?;
    Ok(Json(BooksResponse { books }))
}

async fn get_book(
    State(state): State<Arc<BookState>>,
    Path(isbn): Path<String>,
) -> ApiResult<Json<BookResponse>> {
    let book = state.repository.get_by_isbn(&isbn)?;
    Ok(Json(BookResponse { book }))
}

async fn create_book(
    State(state): State<Arc<BookState>>,
    UnknownBody(body): UnknownBody,
) -> ApiResult<(StatusCode, Json<BookResponse>)> {
    let fields = NewBook::from_value(&body)?;
    let book = state.repository.create(fields)?;
    Ok((StatusCode::CREATED, Json(BookResponse { book })))
}

async fn update_book(
    State(state): State<Arc<BookState>>,
    Path(isbn): Path<String>,
    UnknownBody(body): UnknownBody,
) -> ApiResult<Json<BookResponse>> {
    let patch = BookPatch::from_value(&body)?;
    let book = state.repository.update(&isbn, patch)?;
    Ok(Json(BookResponse { book }))
}

async fn delete_book(
    State(state): State<Arc<BookState>>,
    Path(isbn): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.repository.delete_by_isbn(&isbn)?;
    Ok(Json(MessageResponse {
        message: "Book deleted".to_string(),
    }))
}
