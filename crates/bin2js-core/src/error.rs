//! Error types for bin2js

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for bin2js operations
#[derive(Debug, Error)]
pub enum Bin2JsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read input '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input path '{}' is not valid UTF-8 and cannot name an asset", .path.display())]
    InvalidName { path: PathBuf },

    #[error("Asset not found {0}")]
    AssetNotFound(String),

    #[error("Malformed escape sequence at offset {offset}")]
    MalformedEscape { offset: usize },

    #[error("Malformed bundle: {0}")]
    MalformedBundle(String),
}

/// Result type alias for bin2js operations
pub type Result<T> = std::result::Result<T, Bin2JsError>;
