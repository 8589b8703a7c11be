//! Error types for catalogue loading.

use thiserror::Error;

/// Result type alias for catalogue operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while reading a catalogue file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalogue file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalogue JSON did not parse.
    #[error("catalogue parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
