use thiserror::Error;

/// Why a shelf operation was refused. A refused operation changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("missing name")]
    MissingName,

    #[error("readPage ({read_page}) exceeds pageCount ({page_count})")]
    ReadPageExceedsPageCount { read_page: u32, page_count: u32 },

    #[error("book '{0}' not found")]
    NotFound(String),
}
