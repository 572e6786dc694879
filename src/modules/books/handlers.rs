//! HTTP handlers for the books module

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use bookshelf_http::{ApiJson, AppError, Envelope};

use super::error::BookError;
use super::filter::{BookFilter, BookQuery};
use super::models::{BookDetail, BookList, BookPayload, CreatedBook};
use super::store::Bookshelf;

/// Which endpoint refused the request; picks the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Get,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Get => "get",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

fn reject(action: Action, err: BookError) -> AppError {
    let verb = action.verb();
    match err {
        BookError::MissingName => {
            AppError::validation(format!("Failed to {verb} book. Please provide the book name"))
        }
        BookError::ReadPageExceedsPageCount { .. } => AppError::validation(format!(
            "Failed to {verb} book. readPage must not be greater than pageCount"
        )),
        BookError::NotFound(_) if action == Action::Get => AppError::not_found("Book not found"),
        BookError::NotFound(_) => {
            AppError::not_found(format!("Failed to {verb} book. Id not found"))
        }
    }
}

/// `POST /books`
pub async fn add_book(
    State(shelf): State<Arc<Bookshelf>>,
    ApiJson(payload): ApiJson<BookPayload>,
) -> Result<(StatusCode, Envelope<CreatedBook>), AppError> {
    let book_id = shelf
        .create(payload)
        .map_err(|err| reject(Action::Add, err))?;

    Ok((
        StatusCode::CREATED,
        Envelope::data(CreatedBook { book_id }).with_message("Book added successfully"),
    ))
}

/// `GET /books?name=&reading=&finished=`
pub async fn list_books(
    State(shelf): State<Arc<Bookshelf>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Envelope<BookList> {
    let filter = BookFilter::from(pairs.into_iter().collect::<BookQuery>());
    let books = shelf.list(&filter);
    tracing::debug!(matched = books.len(), ?filter, "books listed");

    Envelope::data(BookList { books })
}

/// `GET /books/{bookId}`
pub async fn get_book(
    State(shelf): State<Arc<Bookshelf>>,
    Path(book_id): Path<String>,
) -> Result<Envelope<BookDetail>, AppError> {
    let book = shelf
        .get(&book_id)
        .map_err(|err| reject(Action::Get, err))?;

    Ok(Envelope::data(BookDetail { book }))
}

/// `PUT /books/{bookId}`
pub async fn edit_book(
    State(shelf): State<Arc<Bookshelf>>,
    Path(book_id): Path<String>,
    ApiJson(payload): ApiJson<BookPayload>,
) -> Result<Envelope<()>, AppError> {
    shelf
        .update(&book_id, payload)
        .map_err(|err| reject(Action::Update, err))?;

    Ok(Envelope::message("Book updated successfully"))
}

/// `DELETE /books/{bookId}`
pub async fn delete_book(
    State(shelf): State<Arc<Bookshelf>>,
    Path(book_id): Path<String>,
) -> Result<Envelope<()>, AppError> {
    shelf
        .delete(&book_id)
        .map_err(|err| reject(Action::Delete, err))?;

    Ok(Envelope::message("Book deleted successfully"))
}

/// Health check endpoint
pub async fn health_check(State(shelf): State<Arc<Bookshelf>>) -> String {
    format!("books module is healthy ({} books)", shelf.len())
}
