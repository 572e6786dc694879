use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use super::error::BookError;

/// Opaque book identifier, assigned by the shelf at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Fresh time-ordered identifier, unique for the process lifetime
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A book on the shelf, as returned by `GET /books/{bookId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    /// Stored as sent, number or string alike
    pub year: Option<Value>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// Always `read_page == page_count`
    pub finished: bool,
    pub reading: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub inserted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// List projection of a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Request body for creating or replacing a book.
///
/// Everything is optional at the wire level; [`BookPayload::validate`]
/// decides what is actually required. A client-sent `finished` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<Value>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub reading: bool,
}

impl BookPayload {
    /// Check the payload, name first, then the page invariant.
    ///
    /// Pages are only compared when both counts are present; an absent
    /// count is stored as `0` afterwards.
    pub fn validate(self) -> Result<BookDraft, BookError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(BookError::MissingName),
        };

        if let (Some(read_page), Some(page_count)) = (self.read_page, self.page_count) {
            if read_page > page_count {
                return Err(BookError::ReadPageExceedsPageCount {
                    read_page,
                    page_count,
                });
            }
        }

        Ok(BookDraft {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count.unwrap_or_default(),
            read_page: self.read_page.unwrap_or_default(),
            reading: self.reading,
        })
    }
}

/// Validated mutable fields of a book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    name: String,
    year: Option<Value>,
    author: Option<String>,
    summary: Option<String>,
    publisher: Option<String>,
    page_count: u32,
    read_page: u32,
    reading: bool,
}

impl BookDraft {
    pub fn finished(&self) -> bool {
        self.read_page == self.page_count
    }

    pub(crate) fn into_book(self, id: BookId, now: OffsetDateTime) -> Book {
        Book {
            id,
            finished: self.finished(),
            name: self.name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field of `book`; `id` and `inserted_at` stay.
    pub(crate) fn apply_to(self, book: &mut Book, now: OffsetDateTime) {
        book.finished = self.finished();
        book.name = self.name;
        book.year = self.year;
        book.author = self.author;
        book.summary = self.summary;
        book.publisher = self.publisher;
        book.page_count = self.page_count;
        book.read_page = self.read_page;
        book.reading = self.reading;
        // A wall clock stepping backwards must not move updatedAt back.
        book.updated_at = now.max(book.updated_at);
    }
}

/// `data` of a successful create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: BookId,
}

/// `data` of a list response.
#[derive(Debug, Clone, Serialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// `data` of a single-book response.
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub book: Book,
}
