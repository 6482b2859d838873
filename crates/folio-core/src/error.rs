//! Error types for Folio
//!
//! Only content loading can fail. Carousel operations never return errors:
//! an empty collection, an unmounted container and zero-width geometry
//! are all ordinary states with a neutral outcome.

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Reading a content file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content document is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content parsed but violates a content rule
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
