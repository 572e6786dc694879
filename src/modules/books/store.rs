//! The in-memory shelf

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use time::OffsetDateTime;

use super::error::BookError;
use super::filter::BookFilter;
use super::models::{Book, BookId, BookPayload, BookSummary};

/// Insertion-ordered collection of books behind one lock.
///
/// Each operation takes the lock once and never across an `.await`, so
/// readers never see a half-applied update and concurrent creates never
/// lose an append.
#[derive(Debug, Default)]
pub struct Bookshelf {
    books: RwLock<Vec<Book>>,
}

impl Bookshelf {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single push/assign/remove, so a panicking holder
    // cannot leave a torn record behind and the data stays usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate `payload` and append a new book, returning its id.
    pub fn create(&self, payload: BookPayload) -> Result<BookId, BookError> {
        let draft = payload.validate()?;
        let book = draft.into_book(BookId::generate(), OffsetDateTime::now_utc());
        let id = book.id.clone();

        self.write().push(book);

        tracing::info!(book_id = %id, "book added");
        Ok(id)
    }

    /// Summaries of the books matching `filter`, in insertion order.
    pub fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.read()
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookSummary::from)
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<Book, BookError> {
        self.read()
            .iter()
            .find(|book| book.id.as_str() == id)
            .cloned()
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    /// Replace every mutable field of book `id`.
    ///
    /// The payload is validated before the lookup, so an invalid payload
    /// for an unknown id reports the validation error.
    pub fn update(&self, id: &str, payload: BookPayload) -> Result<Book, BookError> {
        let draft = payload.validate()?;

        let mut books = self.write();
        let book = books
            .iter_mut()
            .find(|book| book.id.as_str() == id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;

        draft.apply_to(book, OffsetDateTime::now_utc());

        tracing::info!(book_id = %book.id, "book updated");
        Ok(book.clone())
    }

    /// Remove book `id`, keeping the order of the rest.
    pub fn delete(&self, id: &str) -> Result<Book, BookError> {
        let mut books = self.write();
        let index = books
            .iter()
            .position(|book| book.id.as_str() == id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;

        let removed = books.remove(index);

        tracing::info!(book_id = %removed.id, "book deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
