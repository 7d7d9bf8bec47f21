use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Empty page selection")]
    EmptySelection,
    #[error("Invalid page selection: {0}")]
    InvalidSelection(String),
    #[error("Page {page} is out of range (the document has {page_count} pages)")]
    PageOutOfRange { page: u32, page_count: u32 },
    #[error("No pages in document")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, SplitError>;
